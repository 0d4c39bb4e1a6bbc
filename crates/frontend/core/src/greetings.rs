//! Fallback greetings for dialog sessions with no server-side history.
/// Opening line for a character, used when the history fetch fails or comes
/// back empty so a conversation never starts blank.
pub fn greeting(character: &str) -> &'static str {
    match character {
        "tavern_keeper" => "Welcome to the Rusty Dragon Tavern! What can I do for you, traveler?",
        "innkeeper" => "Greetings! Looking for a room or perhaps some information?",
        "merchant" => "Welcome to my shop! I have the finest goods in town.",
        "blacksmith" => "Ah, another adventurer! Need weapons or armor?",
        "guard" => "State your business, citizen.",
        "mysterious_stranger" => "You seek answers... but are you prepared for what you might find?",
        _ => "Hello there, adventurer.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_characters_have_specific_greetings() {
        assert!(greeting("merchant").contains("finest goods"));
        assert_ne!(greeting("merchant"), greeting("guard"));
    }

    #[test]
    fn unknown_characters_fall_back() {
        assert_eq!(greeting("stray_cat"), "Hello there, adventurer.");
    }
}

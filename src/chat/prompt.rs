//! System prompt for the museum assistant, rendered with Handlebars
//! so the only values that reach the template are the ones passed in.

use std::fmt;

use anyhow::{Error, Result};
use handlebars::Handlebars;
use serde_json::json;

use crate::core::Language;

#[derive(Debug)]
pub enum Prompt {
    MuseumAssistant,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const MUSEUM_ASSISTANT_PROMPT: &str = r"You are a helpful assistant for the High Museum of Art in Atlanta, Georgia.
You should respond in {{language}} language.

About the High Museum of Art:
{{#each about}}
- {{this}}
{{/each}}

Hours:
{{#each hours}}
- {{this}}
{{/each}}

Notable Collections:
{{#each collections}}
- {{this}}
{{/each}}

Answer questions about the museum, its collections, visiting information, exhibitions, and general art-related topics. Be friendly, informative, and concise. If you don't know something specific about the museum, acknowledge it honestly and suggest contacting the museum directly.";

const ABOUT: [&str; 8] = [
    "Founded in 1905 as the Atlanta Art Association",
    "Premier art institution in the Southeastern United States",
    "Over 18,000 works in the permanent collection",
    "Seven dedicated curatorial departments: African Art, American Art, Decorative Arts, European Art, Folk Art, Modern & Contemporary Art, and Photography",
    "Features buildings by Pritzker Prize-winning architects Richard Meier (1983) and Renzo Piano (2005)",
    "Over 312,000 square feet of gallery space",
    "Location: 1280 Peachtree Street NE, Atlanta, GA 30309",
    "Accessible via MARTA Arts Center Station",
];

const HOURS: [&str; 4] = [
    "Tuesday - Saturday: 10:00 AM - 5:00 PM",
    "Sunday: 12:00 PM - 5:00 PM",
    "Monday: Closed",
    "Free admission on the second Sunday of each month",
];

const COLLECTIONS: [&str; 5] = [
    "One of the nation's leading collections of Southern and African American folk art",
    "Significant African art collection",
    "American art spanning multiple centuries",
    "European masterworks including Impressionist paintings",
    "Contemporary and modern art",
];

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    // Prompts are plain text, not HTML
    registry.register_escape_fn(handlebars::no_escape);
    registry
        .register_template_string(&Prompt::MuseumAssistant.to_string(), MUSEUM_ASSISTANT_PROMPT)
        .expect("Failed to register template");
    registry
}

pub fn system_prompt(lang: Language) -> Result<String, Error> {
    let prompt = templates().render(
        &Prompt::MuseumAssistant.to_string(),
        &json!({
            "language": lang.name(),
            "about": ABOUT,
            "hours": HOURS,
            "collections": COLLECTIONS,
        }),
    )?;
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_renders_the_session_language() {
        let prompt = system_prompt(Language::Fr).unwrap();
        assert!(prompt.contains("You should respond in French language."));
        assert!(prompt.contains("- Monday: Closed"));
        // Apostrophes stay unescaped
        assert!(prompt.contains("nation's leading"));
    }
}

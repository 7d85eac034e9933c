//! The handful of user-facing strings this crate produces itself, in
//! each supported language.
use std::fmt;
use std::str::FromStr;

use anyhow::{Error, anyhow};
use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl Language {
    /// Pick a language from an `Accept-Language` header value. Spanish
    /// wins over French when both appear, anything else is English.
    pub fn from_accept_language(header: Option<&str>) -> Self {
        let Some(value) = header else {
            return Language::En;
        };
        let value = value.to_lowercase();
        if value.contains("es") {
            Language::Es
        } else if value.contains("fr") {
            Language::Fr
        } else {
            Language::En
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    /// Name of the language in English, used when instructing the model
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Fr => "French",
        }
    }

    pub fn general_admission(&self) -> &'static str {
        match self {
            Language::En => "General Admission",
            Language::Es => "Entrada General",
            Language::Fr => "Entrée Générale",
        }
    }

    pub fn general_admission_description(&self) -> &'static str {
        match self {
            Language::En => {
                "Standard museum access to the permanent collection and current exhibitions."
            }
            Language::Es => {
                "Acceso general al museo, la colección permanente y las exposiciones actuales."
            }
            Language::Fr => {
                "Accès standard au musée, à la collection permanente et aux expositions en cours."
            }
        }
    }

    pub fn event_fallback_description(&self) -> &'static str {
        match self {
            Language::En => "Featured Arts - High Museum of Art.",
            Language::Es => "Artes Destacadas - High Museum of Art.",
            Language::Fr => "Arts en Vedette - High Museum of Art.",
        }
    }

    pub fn chat_welcome(&self) -> &'static str {
        match self {
            Language::En => {
                "Hello! I'm the High Museum of Art assistant. How can I help you today?"
            }
            Language::Es => {
                "¡Hola! Soy el asistente del Museo de Arte High. ¿En qué puedo ayudarte hoy?"
            }
            Language::Fr => {
                "Bonjour ! Je suis l'assistant du High Museum of Art. Comment puis-je vous aider ?"
            }
        }
    }

    pub fn chat_error(&self) -> &'static str {
        match self {
            Language::En => "Sorry, there was an error. Please try again.",
            Language::Es => "Lo siento, hubo un error. Por favor, inténtalo de nuevo.",
            Language::Fr => "Désolé, une erreur s'est produite. Veuillez réessayer.",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    // Accepts bare codes and region tags like "es-MX"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            other => Err(anyhow!("Unsupported language: {}", other)),
        }
    }
}

//! The current member newsletter issue in every supported language.
use super::public::{Newsletter, NewsletterSection};
use crate::core::Language;

const VERIFICATION_HASH: &str =
    "sha256:7b9c1d0f8e3a2b1c4d5e6f7g8h9i0j1k2l3m4n5o6p7q8r9s0t1u2v3w4x5y6z7";

struct Issue {
    month: &'static str,
    title: &'static str,
    subtitle: &'static str,
    introduction: &'static str,
    // (title, content, type)
    sections: [(&'static str, &'static str, &'static str); 4],
    citation: &'static str,
}

const EN: Issue = Issue {
    month: "January 2026",
    title: "Monthly Institutional Review: A New Vision",
    subtitle: "Exploring 'Giants', O'Keeffe's New York, and the architectural evolution of the High Museum.",
    introduction: "Welcome to our special January edition! As we step into 2026, the High Museum of Art continues its mission to be a leading cultural institution in the Southeast. This month, we're celebrating the architectural brilliance of our campus while spotlighting groundbreaking exhibitions that challenge perspectives and celebrate Black diasporic artistry.",
    sections: [
        (
            "Architecture: Structural Light",
            "Our campus is a masterpiece of modern architecture. Designed by Richard Meier in 1983 and expanded by Renzo Piano in 2005, the museum offers over 312,000 square feet of gallery space. Meier's signature white porcelain-enameled steel and Piano's light-capturing 'velum' roof system create a unique environment where the building itself becomes a part of the artistic experience.",
            "architecture",
        ),
        (
            "Major Exhibition: Giants",
            "On view through January 19, 2026, 'Giants: Art from the Dean Collection of Swizz Beatz and Alicia Keys' features a world-class collection of works by multigenerational Black diasporic artists. This exhibition celebrates the power of artists as 'giants' who have shaped the history of art and culture, from Jean-Michel Basquiat to Kehinde Wiley.",
            "exhibition",
        ),
        (
            "The City Reimagined: Georgia O'Keeffe",
            "Continuing through February 16, 2026, 'Georgia O'Keeffe: My New Yorks' explores the iconic artist's decade-long fascination with the city's skyscrapers and urban structure. Long overshadowed by her New Mexico landscapes, these works reveal O'Keeffe's pioneering role in American Modernism and her ability to find organic form within the mechanical grid.",
            "exhibition",
        ),
        (
            "Community & Access",
            "January starts with 'High Frequency Friday' on Jan 3, 2026, featuring local DJs and late-night gallery access. Additionally, 'UPS Second Sunday' on Jan 12 offers free admission and drop-in art-making for families. We invite our members to join these sessions for exclusive curatorial tours starting at 1:00 PM.",
            "event",
        ),
    ],
    citation: "Source: High Museum of Art - Official 2026 Institutional Calendar & Exhibition Review",
};

const ES: Issue = Issue {
    month: "Enero 2026",
    title: "Revisión Institucional Mensual: Una Nueva Visión",
    subtitle: "Explorando 'Giants', el Nueva York de O'Keeffe y la evolución arquitectónica del Museo High.",
    introduction: "¡Bienvenidos a nuestra edición especial de enero! Al comenzar el 2026, el Museo de Arte High continúa su misión de ser una institución cultural líder en el sureste. Este mes celebramos la brillantez arquitectónica de nuestro campus mientras destacamos exposiciones innovadoras que desafían perspectivas y celebran el arte de la diáspora negra.",
    sections: [
        (
            "Arquitectura: Luz Estructural",
            "Nuestro campus es una obra maestra de la arquitectura moderna. Diseñado por Richard Meier en 1983 y ampliado por Renzo Piano en 2005, el museo ofrece más de 312,000 pies cuadrados de espacio de galería. El acero esmaltado en porcelana blanca característico de Meier y el sistema de techo 'velum' de Piano crean un entorno único donde el edificio mismo se convierte en parte de la experiencia artística.",
            "arquitectura",
        ),
        (
            "Exposición Principal: Giants",
            "En exhibición hasta el 19 de enero de 2026, 'Giants: Art from the Dean Collection of Swizz Beatz and Alicia Keys' presenta una colección de clase mundial de obras de artistas de la diáspora negra de varias generaciones. Esta exposición celebra el poder de los archivos maestros como 'gigantes' que han dado forma a la historia del arte y la cultura.",
            "exposición",
        ),
        (
            "La Ciudad Reimaginada: Georgia O'Keeffe",
            "Hasta el 16 de febrero de 2026, 'Georgia O'Keeffe: My New Yorks' explora la fascinación de una década de la icónica artista por los rascacielos y la estructura urbana de la ciudad. Estas obras revelan el papel pionero de O'Keeffe en el modernismo estadounidense.",
            "exposición",
        ),
        (
            "Comunidad y Acceso",
            "Enero comienza con 'High Frequency Friday' el 3 de enero de 2026, con DJs locales y acceso tardío a las galerías. Además, el 'UPS Second Sunday' del 12 de enero ofrece entrada gratuita y talleres de arte para familias.",
            "evento",
        ),
    ],
    citation: "Fuente: Museo de Arte High - Calendario Institucional Oficial 2026 y Revisión de Exposiciones",
};

const FR: Issue = Issue {
    month: "Janvier 2026",
    title: "Revue Institutionnelle Mensuelle : Une Nouvelle Vision",
    subtitle: "Exploration de 'Giants', le New York d'O'Keeffe et l'évolution architecturale du High Museum.",
    introduction: "Bienvenue dans notre édition spéciale de janvier ! Alors que nous entrons en 2026, le High Museum of Art poursuit sa mission d'institution culturelle de premier plan dans le Sud-Est. Ce mois-ci, nous célébrons le génie architectural de notre campus tout en mettant en lumière des expositions révolutionnaires qui défient les perspectives et célèbrent l'art de la diaspora noire.",
    sections: [
        (
            "Architecture : Lumière Structurelle",
            "Notre campus est un chef-d'œuvre de l'architecture moderne. Conçu par Richard Meier en 1983 et agrandi par Renzo Piano en 2005, le musée offre plus de 312 000 pieds carrés d'espace de galerie. L'acier émaillé de porcelaine blanche signature de Meier et le système de toit 'velum' de Piano créent un environnement unique où le bâtiment lui-même devient une partie de l'expérience artistique.",
            "architecture",
        ),
        (
            "Exposition Majeure : Giants",
            "À l'affiche jusqu'au 19 janvier 2026, 'Giants: Art from the Dean Collection of Swizz Beatz and Alicia Keys' présente une collection de classe mondiale d'œuvres d'artistes de la diaspora noire multigénérationnels. Cette exposition célèbre le pouvoir des artistes en tant que 'géants' qui ont façonné l'histoire de l'art et de la culture.",
            "exposition",
        ),
        (
            "La Ville Réimaginée : Georgia O'Keeffe",
            "Se poursuivant jusqu'au 16 février 2026, 'Georgia O'Keeffe: My New Yorks' explore la fascination de dix ans de l'artiste emblématique pour les gratte-ciel et la structure urbaine de la ville. Ces œuvres révèlent le rôle de pionnière d'O'Keeffe dans le modernisme américain.",
            "exposition",
        ),
        (
            "Communauté et Accès",
            "Janvier commence avec le 'High Frequency Friday' le 3 janvier de 2026, avec des DJs locaux et un accès tardif aux galeries. De plus, le 'UPS Second Sunday' du 12 janvier offre l'entrée gratuite et des ateliers d'art pour les familles.",
            "événement",
        ),
    ],
    citation: "Source : High Museum of Art - Calendrier institutionnel officiel 2026 et revue des expositions",
};

pub fn newsletter_for(lang: Language) -> Newsletter {
    let issue = match lang {
        Language::En => &EN,
        Language::Es => &ES,
        Language::Fr => &FR,
    };
    Newsletter {
        month: issue.month.to_string(),
        title: issue.title.to_string(),
        subtitle: issue.subtitle.to_string(),
        introduction: issue.introduction.to_string(),
        sections: issue
            .sections
            .iter()
            .map(|(title, content, kind)| NewsletterSection {
                title: title.to_string(),
                content: content.to_string(),
                kind: kind.to_string(),
            })
            .collect(),
        citation: issue.citation.to_string(),
        verification_hash: VERIFICATION_HASH.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_localizes_every_issue() {
        assert_eq!(newsletter_for(Language::En).month, "January 2026");
        assert_eq!(newsletter_for(Language::Es).month, "Enero 2026");
        assert_eq!(newsletter_for(Language::Fr).month, "Janvier 2026");
        for lang in [Language::En, Language::Es, Language::Fr] {
            let issue = newsletter_for(lang);
            assert_eq!(issue.sections.len(), 4);
            assert!(issue.verification_hash.starts_with("sha256:"));
        }
    }

    #[test]
    fn it_serializes_section_kind_as_type() {
        let json = serde_json::to_value(newsletter_for(Language::En)).unwrap();
        assert_eq!(json["sections"][0]["type"], "architecture");
    }
}

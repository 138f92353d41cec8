//! Built-in dataset used when the backend is unreachable

use chrono::{DateTime, TimeZone, Utc};
use scholarhub_domain::{Publication, PublicationStatus, User, UserRole};

use super::traits::{PublicationSource, SourceError, SourceMetadata};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn author(id: &str, name: &str, email: &str, affiliation: &str) -> User {
    let mut user = User::new(id, name, email)
        .with_affiliation(affiliation)
        .with_role(UserRole::Author);
    user.created_at = day(2023, 1, 1);
    user
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

struct Fixture {
    id: &'static str,
    user_id: &'static str,
    title: &'static str,
    abstract_text: &'static str,
    content: &'static str,
    author: (&'static str, &'static str, &'static str, &'static str),
    year: i32,
    doi: Option<&'static str>,
    journal: &'static str,
    keywords: &'static [&'static str],
    categories: &'static [&'static str],
    date: (i32, u32, u32),
}

const MARIA: (&str, &str, &str, &str) = (
    "1",
    "Dr. María García",
    "maria.garcia@universidad.edu",
    "Universidad Nacional",
);

const FIXTURES: [Fixture; 4] = [
    Fixture {
        id: "1",
        user_id: "1",
        title: "Machine Learning Applications in Healthcare: A Comprehensive Review",
        abstract_text: "Este artículo presenta una revisión exhaustiva de las aplicaciones de machine learning en el sector sanitario, analizando las principales técnicas utilizadas y sus impactos en el diagnóstico médico.",
        content: "<h2>Introducción</h2><p>El machine learning ha revolucionado múltiples sectores, siendo la medicina uno de los más beneficiados...</p>",
        author: MARIA,
        year: 2023,
        doi: Some("10.1234/example.2023.001"),
        journal: "Journal of Medical AI",
        keywords: &["machine learning", "healthcare", "artificial intelligence", "diagnosis"],
        categories: &["Inteligencia Artificial", "Medicina"],
        date: (2023, 6, 15),
    },
    Fixture {
        id: "2",
        user_id: "2",
        title: "Sustainable Software Development: Best Practices and Methodologies",
        abstract_text: "Un análisis de las mejores prácticas para el desarrollo de software sostenible, incluyendo metodologías ágiles y técnicas de green computing.",
        content: "<h2>Metodologías Sostenibles</h2><p>El desarrollo sostenible de software requiere un enfoque holístico...</p>",
        author: (
            "2",
            "Dr. Carlos Rodríguez",
            "carlos.rodriguez@tech.edu",
            "Instituto Tecnológico",
        ),
        year: 2024,
        doi: None,
        journal: "Software Engineering Quarterly",
        keywords: &["sustainable development", "software engineering", "agile", "green computing"],
        categories: &["Ingeniería de Software", "Sostenibilidad"],
        date: (2024, 3, 20),
    },
    Fixture {
        id: "3",
        user_id: "1",
        title: "Redes Neuronales y su Impacto en la Industria",
        abstract_text: "Exploración de cómo las redes neuronales están transformando procesos industriales y automatización.",
        content: "<h2>Redes Neuronales</h2><p>Las redes neuronales han permitido avances significativos en la industria...</p>",
        author: MARIA,
        year: 2025,
        doi: None,
        journal: "Revista de Innovación Industrial",
        keywords: &["redes neuronales", "industria", "automatización"],
        categories: &["Inteligencia Artificial", "Industria"],
        date: (2025, 1, 10),
    },
    Fixture {
        id: "4",
        user_id: "3",
        title: "Blockchain en la Educación Superior",
        abstract_text: "Un estudio sobre la aplicación de blockchain para la certificación académica y la gestión de credenciales.",
        content: "<h2>Blockchain y Educación</h2><p>El blockchain ofrece nuevas oportunidades para la gestión segura de credenciales...</p>",
        author: ("3", "Dra. Laura Pérez", "laura.perez@edu.org", "Universidad Digital"),
        year: 2025,
        doi: None,
        journal: "Journal of EdTech",
        keywords: &["blockchain", "educación", "certificación"],
        categories: &["Tecnología Educativa", "Blockchain"],
        date: (2025, 5, 5),
    },
];

impl Fixture {
    fn build(&self) -> Publication {
        let (author_id, name, email, affiliation) = self.author;
        let (y, m, d) = self.date;
        Publication {
            id: self.id.to_string(),
            title: self.title.to_string(),
            abstract_text: self.abstract_text.to_string(),
            content: self.content.to_string(),
            authors: vec![author(author_id, name, email, affiliation)],
            year: self.year,
            doi: self.doi.map(str::to_string),
            journal: Some(self.journal.to_string()),
            keywords: strings(self.keywords),
            categories: strings(self.categories),
            file_path: None,
            file_name: None,
            status: PublicationStatus::Published,
            created_at: day(y, m, d),
            updated_at: day(y, m, d),
            user_id: self.user_id.to_string(),
        }
    }
}

/// The four built-in publications, in store order
pub fn fallback_publications() -> Vec<Publication> {
    FIXTURES.iter().map(Fixture::build).collect()
}

/// Source serving the built-in dataset
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackSource;

impl FallbackSource {
    pub fn metadata() -> SourceMetadata {
        SourceMetadata {
            id: "fallback",
            name: "Built-in dataset",
            description: "Fixed sample publications for offline use",
        }
    }
}

impl PublicationSource for FallbackSource {
    async fn fetch_publications(&self) -> Result<Vec<Publication>, SourceError> {
        Ok(fallback_publications())
    }
}

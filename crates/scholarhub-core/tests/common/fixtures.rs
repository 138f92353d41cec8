//! Test fixture builders and proptest strategies

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use scholarhub_domain::{Publication, PublicationDraft, SearchCriteria, User};

pub const CATEGORIES: [&str; 4] = ["Medicina", "Industria", "Blockchain", "Sostenibilidad"];

const WORDS: [&str; 8] = [
    "neural", "Networks", "blockchain", "Education", "green", "Software", "health", "Data",
];

const AUTHORS: [&str; 3] = ["Dr. María García", "Carlos Rodríguez", "Laura Pérez"];

/// Build a publication with an explicit id, year and creation time
pub fn record(id: &str, title: &str, year: i32, created_at: DateTime<Utc>) -> Publication {
    let draft = PublicationDraft::new(title, format!("Abstract of {title}"), year);
    Publication::from_draft(id, draft, created_at)
}

#[allow(dead_code)]
pub fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).single().unwrap()
}

fn publication_strategy() -> impl Strategy<Value = (String, i32, i64, usize, Vec<usize>)> {
    (
        prop::collection::vec(prop::sample::select(WORDS.to_vec()), 1..4)
            .prop_map(|words| words.join(" ")),
        2015..2027i32,
        0..1_000i64,
        0..AUTHORS.len(),
        prop::collection::vec(0..CATEGORIES.len(), 0..3),
    )
}

/// Publications with unique ids equal to their index in the vector
pub fn publications_strategy(max: usize) -> impl Strategy<Value = Vec<Publication>> {
    prop::collection::vec(publication_strategy(), 0..max).prop_map(|parts| {
        parts
            .into_iter()
            .enumerate()
            .map(|(i, (title, year, created, author, categories))| {
                let mut p = record(&i.to_string(), &title, year, at(created));
                p.authors = vec![User::new(author.to_string(), AUTHORS[author], "a@b.c")];
                p.categories = categories.iter().map(|c| CATEGORIES[*c].to_string()).collect();
                p.keywords = vec![WORDS[i % WORDS.len()].to_lowercase()];
                p
            })
            .collect()
    })
}

#[allow(dead_code)]
pub fn criteria_strategy() -> impl Strategy<Value = SearchCriteria> {
    (
        prop::option::of(prop::sample::select(WORDS.to_vec())),
        prop::option::of(prop::sample::select(vec!["maría", "RODR", "pérez", "nobody"])),
        prop::option::of(2010..2030i32),
        prop::option::of(2010..2030i32),
        prop::option::of(prop::collection::vec(
            prop::sample::select(CATEGORIES.to_vec()),
            0..3,
        )),
        keywords_strategy(),
    )
        .prop_map(
            |(query, author, year_from, year_to, categories, keywords)| SearchCriteria {
                query: query.map(str::to_string),
                author: author.map(str::to_string),
                year_from,
                year_to,
                categories: categories.map(|c| c.into_iter().map(str::to_string).collect()),
                keywords,
            },
        )
}

/// Optional keyword tags, including ones no publication carries
#[allow(dead_code)]
pub fn keywords_strategy() -> impl Strategy<Value = Option<Vec<String>>> {
    let mut tags: Vec<String> = WORDS.iter().map(|w| w.to_lowercase()).collect();
    tags.push("quantum".to_string());
    prop::option::of(prop::collection::vec(prop::sample::select(tags), 0..3))
}

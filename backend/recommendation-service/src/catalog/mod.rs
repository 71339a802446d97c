//! In-process course catalog.
//!
//! This deployment ships its catalog with the binary; the functions here
//! stand in for an external catalog collaborator and keep the same shape
//! (full universe + popular subset) so swapping in a real one later only
//! touches this module.

use crate::models::{Lesson, Product};

fn lesson(id: &str, title: &str, position: u32, is_locked: bool) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        position,
        is_locked,
        is_completed: false,
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    tags: &[&str],
    price: f64,
    instructor: &str,
    level: &str,
    duration_minutes: f64,
    syllabus: Vec<Lesson>,
) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        price,
        currency: "INR".to_string(),
        instructor: instructor.to_string(),
        level: Some(level.to_string()),
        language: "English".to_string(),
        duration_minutes: Some(duration_minutes),
        syllabus,
    }
}

/// The full product universe for this deployment.
pub fn all_products() -> Vec<Product> {
    vec![
        product(
            "sanskrit-foundations",
            "Sanskrit Foundations",
            "Devanagari script, core vocabulary and sentence structure for absolute beginners.",
            "Language",
            &["sanskrit", "basics", "grammar"],
            2999.0,
            "Dr. Ananya Rao",
            "Beginner",
            480.0,
            vec![
                lesson("sf-01", "The Devanagari Script", 1, false),
                lesson("sf-02", "Vowels and Consonants", 2, false),
                lesson("sf-03", "First Words", 3, false),
                lesson("sf-04", "Simple Sentences", 4, true),
                lesson("sf-05", "Reading Practice", 5, true),
            ],
        ),
        product(
            "sanskrit-advanced-grammar",
            "Advanced Sanskrit Grammar",
            "Panini's sutras, sandhi rules and compound formation for serious students.",
            "Language",
            &["sanskrit", "advanced", "grammar"],
            4999.0,
            "Dr. Ananya Rao",
            "Advanced",
            600.0,
            vec![
                lesson("sag-01", "Sandhi Rules", 1, false),
                lesson("sag-02", "Samasa: Compound Words", 2, false),
                lesson("sag-03", "Verb Conjugation Deep Dive", 3, true),
                lesson("sag-04", "Reading the Classics", 4, true),
            ],
        ),
        product(
            "vedanta-philosophy",
            "Introduction to Vedanta",
            "The Upanishads and the core questions of Vedantic philosophy.",
            "Philosophy",
            &["vedanta", "philosophy", "upanishads"],
            3499.0,
            "Prof. Karthik Iyer",
            "Intermediate",
            360.0,
            vec![
                lesson("vp-01", "What is Vedanta?", 1, false),
                lesson("vp-02", "The Principal Upanishads", 2, false),
                lesson("vp-03", "Atman and Brahman", 3, false),
                lesson("vp-04", "Schools of Vedanta", 4, true),
            ],
        ),
        product(
            "yoga-sutras-patanjali",
            "The Yoga Sutras of Patanjali",
            "A guided reading of the sutras with practice woven through.",
            "Yoga",
            &["yoga", "meditation", "sutras"],
            2499.0,
            "Meera Krishnan",
            "Beginner",
            240.0,
            vec![
                lesson("ys-01", "Why the Sutras Matter", 1, false),
                lesson("ys-02", "Samadhi Pada", 2, false),
                lesson("ys-03", "Sadhana Pada", 3, true),
            ],
        ),
        product(
            "sanskrit-poetry-writing",
            "Writing Sanskrit Poetry",
            "Meter, ornamentation and composing your own verses.",
            "Creative Writing",
            &["poetry", "writing", "sanskrit"],
            1999.0,
            "Kavya Deshpande",
            "Intermediate",
            200.0,
            vec![
                lesson("sp-01", "Chandas: The Meters", 1, false),
                lesson("sp-02", "Alankara: Ornamentation", 2, false),
                lesson("sp-03", "Composing Your First Verse", 3, true),
            ],
        ),
        product(
            "classical-india-history",
            "History of Classical India",
            "From the Mauryas to the Guptas through primary sources.",
            "History",
            &["history", "classical"],
            1499.0,
            "Prof. Karthik Iyer",
            "Beginner",
            150.0,
            vec![
                lesson("ci-01", "Sources and Methods", 1, false),
                lesson("ci-02", "The Mauryan Empire", 2, false),
                lesson("ci-03", "The Gupta Age", 3, true),
            ],
        ),
        product(
            "meditation-foundations",
            "Meditation Foundations",
            "A practical four-week meditation on-ramp.",
            "Yoga",
            &["meditation", "basics"],
            999.0,
            "Meera Krishnan",
            "Beginner",
            120.0,
            vec![
                lesson("mf-01", "Posture and Breath", 1, false),
                lesson("mf-02", "Working with Thoughts", 2, false),
                lesson("mf-03", "Building a Daily Practice", 3, false),
            ],
        ),
    ]
}

/// The "popular" subset surfaced as fallback recommendations.
pub fn popular_products() -> Vec<Product> {
    const POPULAR_IDS: [&str; 3] = [
        "sanskrit-foundations",
        "yoga-sutras-patanjali",
        "meditation-foundations",
    ];

    all_products()
        .into_iter()
        .filter(|p| POPULAR_IDS.contains(&p.id.as_str()))
        .collect()
}

//! Keyword-based relevance classification.
//!
//! Matching is substring-based over a lowercased, space-padded combination
//! of title and content. The padding lets the short gate keywords (" ai ",
//! " ml ") match only at word boundaries instead of inside words like
//! "arterial". Classification is a pure function of the input text.

use crate::types::{Category, Classification};

/// At least one of these must appear in the text for an article to be
/// considered at all, independent of category scoring.
const GLOBAL_KEYWORDS: &[&str] = &[
    " ai ",
    "artificial intelligence",
    "machine learning",
    "deep learning",
    "neural network",
    "llm",
    "language model",
    "computer vision",
    "reinforcement learning",
    " ml ",
    "machine-learning",
    "deep-learning",
    "ai-powered",
    "ai-driven",
    "ai-based",
    "ml-based",
];

const MEDICINE_KEYWORDS: &[&str] = &[
    "medical",
    "health",
    "clinical",
    "disease",
    "diagnosis",
    "patient",
    "hospital",
    "therapy",
    "drug",
    "cancer",
    "lesion",
    "imaging",
    "radiology",
    "healthcare",
    "medicine",
    "diagnostic",
    "biomedical",
    "pharmaceutical",
    "epidemiology",
    "medical imaging",
];

const PLANET_KEYWORDS: &[&str] = &[
    "climate",
    "environment",
    "sustainability",
    "carbon",
    "energy",
    "renewable",
    "solar",
    "wind",
    "emissions",
    "greenhouse",
    "ecological",
    "conservation",
    "biodiversity",
    "water",
    "ocean",
    "atmospheric",
    "weather",
    "pollution",
    "ecosystem",
    "flood",
    "drought",
    "forest",
    "deforestation",
    "geophysics",
    "earth system",
];

const GREEN_AI_KEYWORDS: &[&str] = &[
    "energy efficient",
    "model compression",
    "pruning",
    "quantization",
    "distillation",
    "carbon footprint",
    "sustainable computing",
    "edge computing",
    "power consumption",
    "green computing",
    "model efficiency",
    "computational cost",
    "training efficiency",
    "inference efficiency",
    "parameter efficient",
    "sparse model",
    "knowledge distillation",
    "neural architecture search",
    "automl",
    "efficient transformer",
    "mobile ai",
    "tinyml",
    "edge ai",
    "carbon emission",
    "energy consumption",
    "gpu power",
    "compute efficient",
];

/// Minimum winning category score (percent of keywords matched) for an
/// article to count as relevant.
const MIN_THRESHOLD: f64 = 5.0;

fn category_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Medicine => MEDICINE_KEYWORDS,
        Category::Planet => PLANET_KEYWORDS,
        Category::GreenAi => GREEN_AI_KEYWORDS,
    }
}

/// Classify an article by title and body text.
///
/// Returns `None` when the text contains no AI indicator at all, or when the
/// best category's keyword match density falls below the threshold.
pub fn classify(title: &str, content: &str) -> Option<Classification> {
    // Pad with spaces so single-word keywords match at word boundaries.
    let text = format!(" {} {} ", title, content).to_lowercase();

    if !GLOBAL_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return None;
    }

    let mut best: Option<(Category, f64)> = None;
    for category in Category::ALL {
        let keywords = category_keywords(category);
        let matches = keywords.iter().filter(|kw| text.contains(*kw)).count();
        let score = (matches as f64 / keywords.len() as f64) * 100.0;

        // Strictly-greater keeps the first declared category on ties.
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((category, score)),
        }
    }

    let (category, score) = best?;
    if score < MIN_THRESHOLD {
        return None;
    }

    Some(Classification {
        category,
        confidence: (score / 20.0).min(1.0),
        relevancy_score: (score * 2.0).min(100.0),
    })
}

/// Quick relevance check without keeping the classification.
pub fn is_relevant(title: &str, content: &str) -> bool {
    classify(title, content).is_some()
}

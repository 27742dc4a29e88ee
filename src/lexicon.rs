// src/lexicon.rs
// Word lists and fixed tables used by the analysis pipeline.
//
// Everything in this module is configuration data, not logic: the journal
// corpus is mostly French, so the lexicons are too, while category names
// (emotions, themes) stay English for the API surface.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Spelling corrections applied after cleanup, keyed on the normalized form.
/// Mostly accent restoration for words users type without diacritics.
pub static SPELLING_CORRECTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ecole", "école"),
        ("etude", "étude"),
        ("etudes", "études"),
        ("sante", "santé"),
        ("cinema", "cinéma"),
        ("television", "télévision"),
        ("ete", "été"),
        ("reunion", "réunion"),
        ("velo", "vélo"),
        ("cafe", "café"),
        ("musee", "musée"),
        ("theatre", "théâtre"),
        ("feuilleon", "feuilletons"),
        ("feuilleton", "feuilletons"),
        ("soiree", "soirée"),
        ("journee", "journée"),
        ("matinee", "matinée"),
    ])
});

/// Words a tag must never be: opinion expressions (including their
/// apostrophe-stripped and hyphenated forms - the normalizer removes
/// apostrophes before this check runs), common verbs, common adjectives,
/// pronouns, and stopwords.
pub static EXCLUDED_TAG_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = HashSet::new();

    // Opinion expressions
    set.extend([
        "aime", "adore", "prefere", "préfère", "deteste", "déteste", "plait", "plaît", "jaime",
        "jadore", "jprefere", "jdeteste", "j-aime", "j-adore", "je-prefere", "je-prefère",
    ]);

    // Common verbs
    set.extend([
        "faire", "aller", "manger", "marcher", "etre", "être", "avoir", "voir", "venir",
        "prendre", "mettre", "dire", "parler", "jouer", "finir", "commencer", "penser",
        "vouloir", "pouvoir", "devoir", "savoir", "passer", "rester", "trouver", "donner",
        "regarder", "ecouter", "écouter",
    ]);

    // Common adjectives
    set.extend([
        "bon", "bonne", "mauvais", "mauvaise", "grand", "grande", "petit", "petite", "beau",
        "belle", "joli", "jolie", "nouveau", "nouvelle", "vieux", "vieille", "super", "genial",
        "génial",
    ]);

    // Pronouns
    set.extend([
        "je", "tu", "il", "elle", "nous", "vous", "ils", "elles", "moi", "toi", "lui", "eux",
        "mon", "ma", "mes", "ton", "ta", "tes", "son", "sa", "ses", "notre", "votre", "leur",
        "leurs",
    ]);

    // Stopwords
    set.extend([
        "le", "la", "les", "un", "une", "des", "du", "de", "et", "ou", "mais", "donc", "car",
        "ne", "pas", "plus", "moins", "tres", "très", "avec", "sans", "dans", "pour", "sur",
        "sous", "entre", "vers", "chez", "que", "qui", "quoi", "dont", "quand", "comme",
        "alors", "aussi", "bien", "tout", "tous", "toute", "toutes", "cette", "cela", "ceci",
        "the", "and", "this", "that", "from", "with", "your",
    ]);

    set
});

/// Stopwords for the keyword/phrase extractor (mixed French/English corpus).
pub static EXTRACTOR_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = HashSet::new();

    set.extend([
        "the", "a", "an", "and", "or", "but", "so", "to", "of", "in", "on", "for", "with",
        "at", "by", "from", "as", "is", "it", "this", "that", "these", "those", "i", "you",
        "we", "they", "he", "she", "my", "our", "your", "their", "be", "was", "were", "am",
        "are", "been", "have", "has", "had", "do", "did", "does", "not", "no", "yes", "very",
        "really", "just", "too", "also", "if", "then", "than", "when", "while", "because",
        "about", "into", "over", "after", "before", "out", "up", "down", "more", "most",
        "less", "least", "me", "him", "her", "them", "us",
    ]);

    set.extend([
        "le", "la", "les", "un", "une", "des", "du", "de", "et", "ou", "au", "aux", "avec",
        "sans", "dans", "pour", "sur", "sous", "que", "qui", "quoi", "est", "sont", "était",
        "je", "tu", "il", "elle", "nous", "vous", "ils", "elles", "mon", "ma", "mes", "son",
        "sa", "ses", "ce", "cette", "ces", "ne", "pas", "plus", "très", "tout", "tous",
        "comme", "mais", "donc", "alors", "quand", "parce",
    ]);

    set
});

/// Exclusion set for the tag-suggestion keyword fallback. Only words of four
/// or more characters can reach this check, but shorter entries are kept for
/// symmetry with the source list.
pub static FALLBACK_TAG_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "avec", "sans", "dans", "pour", "cette", "cela", "comme", "mais", "alors", "donc",
        "parce", "quand", "tous", "tout", "très", "tres", "plus", "moins", "elle", "elles",
        "nous", "vous", "que", "qui", "quoi", "quel", "quelle", "dont", "entre", "vers",
        "chez", "une", "des", "les", "aux", "the", "and", "this", "that", "from", "into",
        "your", "aime", "adore", "prefere", "préfère", "jaime", "jadore", "faire", "aller",
        "manger", "marcher", "être", "etre", "avoir", "était", "etait", "bonne", "mauvais",
        "grande", "petite", "aujourd'hui",
    ])
});

/// Positive sentiment lexicon (French journal vocabulary).
pub static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "heureux", "heureuse", "content", "contente", "joyeux", "joyeuse", "bon", "bonne",
        "génial", "super", "excellent", "parfait", "réussi", "fier", "fière", "satisfait",
        "satisfaite", "aimer", "adorer", "plaisir", "succès", "victoire", "progrès",
    ])
});

/// Negative sentiment lexicon.
pub static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "triste", "malheureux", "malheureuse", "déçu", "déçue", "mauvais", "mauvaise",
        "terrible", "horrible", "stressé", "stressée", "anxieux", "anxieuse", "inquiet",
        "inquiète", "colère", "fâché", "fâchée", "fatigué", "fatiguée", "difficile",
        "problème", "échec", "rate", "échoué",
    ])
});

/// Emotion categories and their keyword sets.
pub static EMOTION_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "happy",
        &["heureux", "heureuse", "content", "contente", "joyeux", "joyeuse", "sourire", "souriant"],
    ),
    (
        "sad",
        &["triste", "malheureux", "malheureuse", "pleurer", "déprimé", "déprimée"],
    ),
    (
        "anxious",
        &["anxieux", "anxieuse", "stressé", "stressée", "inquiet", "inquiète", "nerveux", "nerveuse"],
    ),
    (
        "angry",
        &["colère", "fâché", "fâchée", "énervé", "énervée", "frustré", "frustrée"],
    ),
    (
        "calm",
        &["calme", "paisible", "serein", "sereine", "tranquille", "relax", "détendu", "détendue"],
    ),
    (
        "productive",
        &["productif", "productive", "efficace", "accompli", "réussi", "fier", "fière", "succès"],
    ),
    (
        "tired",
        &["fatigué", "fatiguée", "épuisé", "épuisée", "épuisement", "sommeil", "dormir"],
    ),
];

/// Theme categories and their keyword sets. Theme confidence is the fraction
/// of a set matched, so set sizes are kept comparable.
pub static THEME_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "work",
        &["travail", "bureau", "collègue", "collègues", "projet", "réunion", "patron", "boulot", "emploi", "mission"],
    ),
    (
        "study",
        &["étude", "études", "école", "cours", "examen", "devoirs", "apprendre", "université", "leçon", "révision"],
    ),
    (
        "family",
        &["famille", "parents", "mère", "père", "frère", "sœur", "enfant", "enfants", "maman", "papa"],
    ),
    (
        "friends",
        &["ami", "amie", "amis", "amies", "copain", "copine", "soirée", "sortie", "rencontre"],
    ),
    (
        "health",
        &["santé", "médecin", "sport", "exercice", "sommeil", "courir", "maladie", "forme", "médicament"],
    ),
    (
        "hobbies",
        &["musique", "lecture", "film", "jeu", "peinture", "dessin", "cuisine", "jardin", "photo", "guitare"],
    ),
    (
        "travel",
        &["voyage", "vacances", "train", "avion", "hôtel", "plage", "montagne", "visite", "découverte"],
    ),
    (
        "reflection",
        &["penser", "réflexion", "sentiment", "émotion", "souvenir", "rêve", "avenir", "espoir", "gratitude"],
    ),
];

/// Fixed palette used when no base color is given. Lowercase six-digit hex,
/// seeded around the app's default category blue (#3b82f6).
pub static COLOR_PALETTE: &[&str] = &[
    "#3b82f6", "#ef4444", "#f97316", "#f59e0b", "#84cc16", "#22c55e", "#10b981", "#14b8a6",
    "#06b6d4", "#0ea5e9", "#6366f1", "#8b5cf6", "#a855f7", "#d946ef", "#ec4899", "#f43f5e",
    "#78716c", "#64748b", "#0d9488", "#7c3aed",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_set_covers_documented_examples() {
        assert!(EXCLUDED_TAG_WORDS.contains("jaime"));
        assert!(EXCLUDED_TAG_WORDS.contains("aime"));
        assert!(EXCLUDED_TAG_WORDS.contains("adore"));
        assert!(EXCLUDED_TAG_WORDS.contains("prefere"));
    }

    #[test]
    fn test_corrections_cover_documented_examples() {
        assert_eq!(SPELLING_CORRECTIONS.get("ecole"), Some(&"école"));
        assert_eq!(SPELLING_CORRECTIONS.get("feuilleon"), Some(&"feuilletons"));
    }

    #[test]
    fn test_palette_is_lowercase_hex() {
        assert_eq!(COLOR_PALETTE.len(), 20);
        for color in COLOR_PALETTE {
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_emotion_and_theme_vocabularies_complete() {
        let emotions: Vec<&str> = EMOTION_KEYWORDS.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            emotions,
            ["happy", "sad", "anxious", "angry", "calm", "productive", "tired"]
        );
        let themes: Vec<&str> = THEME_KEYWORDS.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            themes,
            ["work", "study", "family", "friends", "health", "hobbies", "travel", "reflection"]
        );
    }
}

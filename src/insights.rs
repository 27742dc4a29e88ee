// src/insights.rs
// Periodic journal reports: LLM analysis with a rule-based expert fallback

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::AiConfig;
use crate::llm::{extract_json_object, strip_code_fences, TextCompletion};

/// Every insight list is capped at this many entries.
const MAX_ITEMS: usize = 3;

// Leading bullet/numbering decoration on a prose list line.
#[allow(clippy::unwrap_used)]
static BULLET_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^[-•*\d."']+\s*"#).unwrap());

/// Aggregate journal statistics for a reporting period. All fields default
/// to zero/empty so partially-populated callers still work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateStats {
    pub total_entries: u32,
    pub period_days: u32,
    pub average_mood: f64,
    pub average_word_count: f64,
    pub top_emotions: Vec<String>,
    pub top_themes: Vec<String>,
    /// 0..1 fraction of period days with an entry.
    pub consistency_score: f64,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self {
            total_entries: 0,
            period_days: 0,
            average_mood: 0.0,
            average_word_count: 0.0,
            top_emotions: Vec::new(),
            top_themes: Vec::new(),
            consistency_score: 0.0,
        }
    }
}

/// A generated report: four lists of French phrases, each at most three
/// entries long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightBundle {
    pub trends: Vec<String>,
    pub patterns: Vec<String>,
    pub recommendations: Vec<String>,
    pub psychological_insights: Vec<String>,
    pub ai_generated: bool,
    pub confidence_score: f64,
}

/// Generates insight reports from aggregate statistics.
///
/// With a completion client the report comes from a structured-JSON prompt;
/// without one, or on any failure, a deterministic rule table produces it.
pub struct InsightGenerator {
    config: AiConfig,
    llm: Option<Arc<dyn TextCompletion>>,
}

impl InsightGenerator {
    pub fn new(config: AiConfig, llm: Option<Arc<dyn TextCompletion>>) -> Self {
        Self { config, llm }
    }

    /// Generate a report for `stats`. Never fails.
    pub async fn generate(&self, stats: &AggregateStats) -> InsightBundle {
        if self.config.has_llm() {
            if let Some(llm) = &self.llm {
                match llm.complete(&insight_prompt(stats)).await {
                    Ok(response) => {
                        if let Some(bundle) = parse_insight_json(&response) {
                            return bundle;
                        }
                        if let Some(bundle) = extract_lists_from_prose(&response) {
                            debug!("Insight JSON parse failed, recovered lists from prose");
                            return bundle;
                        }
                        warn!("Insight response unusable, using expert fallback");
                    }
                    Err(e) => {
                        warn!(error = %e, "Insight completion failed, using expert fallback");
                    }
                }
            }
        } else {
            debug!("No LLM configured for insights, using expert fallback");
        }

        expert_fallback(stats)
    }
}

/// French context summary of the period statistics.
fn context_summary(stats: &AggregateStats) -> String {
    let mood_status = if stats.average_mood > 0.1 {
        "positive"
    } else if stats.average_mood < -0.1 {
        "negative"
    } else {
        "neutral"
    };
    let emotions = join_or_divers(&stats.top_emotions);
    let themes = join_or_divers(&stats.top_themes);

    format!(
        "Statistiques du journal:\n\
         - Période: {} jours\n\
         - Nombre d'entrées: {}\n\
         - Humeur moyenne: {:.2} ({})\n\
         - Mots par entrée: {:.0}\n\
         - Émotions principales: {}\n\
         - Thèmes récurrents: {}\n\
         - Consistance: {:.0}%",
        stats.period_days,
        stats.total_entries,
        stats.average_mood,
        mood_status,
        stats.average_word_count,
        emotions,
        themes,
        stats.consistency_score * 100.0,
    )
}

fn join_or_divers(items: &[String]) -> String {
    if items.is_empty() {
        "Divers".to_string()
    } else {
        items.join(", ")
    }
}

fn insight_prompt(stats: &AggregateStats) -> String {
    format!(
        r#"Tu es un expert en psychologie et analyse de journal personnel.

CONTEXTE À ANALYSER:
{}

GÉNÈRE UN RAPPORT D'ANALYSE en JSON avec cette structure exacte:
{{
  "trends": ["tendance 1", "tendance 2", "tendance 3"],
  "patterns": ["pattern 1", "pattern 2", "pattern 3"],
  "recommendations": ["recommandation 1", "recommandation 2", "recommandation 3"],
  "psychological_insights": ["insight 1", "insight 2", "insight 3"]
}}

RÈGLES:
- Réponds UNIQUEMENT en JSON valide
- Pas de texte avant ou après
- Sois bienveillant et constructif
- Personnalise selon les données
- Utilise un français clair
- Sois spécifique et concret"#,
        context_summary(stats)
    )
}

/// Parse the structured JSON response. Succeeds only if at least one of the
/// four lists is non-empty; empty lists are then backfilled with a stock
/// phrase.
fn parse_insight_json(response: &str) -> Option<InsightBundle> {
    let cleaned = strip_code_fences(response);
    let json_str = extract_json_object(&cleaned)?;
    let parsed: serde_json::Value = serde_json::from_str(json_str).ok()?;

    let trends = string_list(&parsed, "trends");
    let patterns = string_list(&parsed, "patterns");
    let recommendations = string_list(&parsed, "recommendations");
    let insights = string_list(&parsed, "psychological_insights");

    if trends.is_empty() && patterns.is_empty() && recommendations.is_empty() && insights.is_empty()
    {
        return None;
    }

    Some(InsightBundle {
        trends: capped_or_stock(trends, "Tendance d'écriture régulière"),
        patterns: capped_or_stock(patterns, "Pattern de réflexion constante"),
        recommendations: capped_or_stock(recommendations, "Continuez votre excellent travail"),
        psychological_insights: capped_or_stock(
            insights,
            "Votre pratique montre une grande conscience de soi",
        ),
        ai_generated: true,
        confidence_score: 0.85,
    })
}

fn string_list(value: &serde_json::Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn capped_or_stock(mut list: Vec<String>, stock: &str) -> Vec<String> {
    list.truncate(MAX_ITEMS);
    if list.is_empty() {
        vec![stock.to_string()]
    } else {
        list
    }
}

/// Second-chance parser for models that answer with prose sections instead
/// of JSON: scan for section headings and bullet lines underneath them.
/// Returns None when no section produced anything.
fn extract_lists_from_prose(response: &str) -> Option<InsightBundle> {
    // trends, patterns, recommendations, insights
    let mut sections: [Vec<String>; 4] = Default::default();
    let mut current: Option<usize> = None;

    for raw_line in response.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let lower = line.to_lowercase();
        if contains_any(&lower, &["tendance", "trend", "évolution"]) {
            current = Some(0);
            continue;
        } else if contains_any(&lower, &["pattern", "comportement", "habitude"]) {
            current = Some(1);
            continue;
        } else if contains_any(&lower, &["recommandation", "suggestion", "conseil"]) {
            current = Some(2);
            continue;
        } else if contains_any(&lower, &["insight", "psycholog", "analyse"]) {
            current = Some(3);
            continue;
        }

        if !looks_like_list_item(line) {
            continue;
        }
        let item = BULLET_PREFIX.replace(line, "").trim().to_string();
        if item.chars().count() <= 15 {
            continue;
        }
        if let Some(idx) = current {
            if sections[idx].len() < 5 {
                sections[idx].push(item);
            }
        }
    }

    if sections.iter().all(|s| s.is_empty()) {
        return None;
    }
    let [trends, patterns, recommendations, insights] = sections;

    Some(InsightBundle {
        trends: capped_or_stock(trends, "Croissance dans la pratique d'écriture"),
        patterns: capped_or_stock(patterns, "Régularité dans l'expression personnelle"),
        recommendations: capped_or_stock(recommendations, "Continuez à documenter vos réflexions"),
        psychological_insights: capped_or_stock(
            insights,
            "Votre journal renforce la conscience de soi",
        ),
        ai_generated: true,
        confidence_score: 0.75,
    })
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn looks_like_list_item(line: &str) -> bool {
    let first = match line.chars().next() {
        Some(c) => c,
        None => return false,
    };
    matches!(first, '-' | '•' | '*' | '"')
        || (first.is_ascii_digit() && line.chars().take(3).any(|c| c == '.'))
        || (line.chars().count() > 10 && first != '{')
}

/// Deterministic rule table: band the statistics, pick phrase sets.
fn expert_fallback(stats: &AggregateStats) -> InsightBundle {
    let mut trends: Vec<String> = trend_phrases(stats.average_mood)
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut patterns: Vec<String> = pattern_phrases(stats.consistency_score)
        .iter()
        .map(|s| s.to_string())
        .collect();
    patterns.extend(theme_pattern_phrases(&stats.top_themes));

    let mut recommendations: Vec<String> = entry_count_recommendations(stats.total_entries)
        .iter()
        .map(|s| s.to_string())
        .collect();
    if stats.average_mood < -0.2 {
        recommendations.extend(
            [
                "Pratiquez l'auto-compassion lors des périodes difficiles",
                "Identifiez les petites victoires quotidiennes dans vos écrits",
                "Partagez vos réflexions avec une personne de confiance",
            ]
            .map(String::from),
        );
    } else if stats.average_mood > 0.2 {
        recommendations.extend(
            [
                "Utilisez votre énergie positive pour initier de nouveaux projets",
                "Documentez ce qui contribue à votre bien-être pour le reproduire",
                "Célébrez vos progrès et moments de bonheur dans votre journal",
            ]
            .map(String::from),
        );
    }
    if stats.average_word_count < 50.0 {
        recommendations.push(
            "Essayez de développer davantage vos pensées pour des insights plus profonds"
                .to_string(),
        );
    } else if stats.average_word_count > 300.0 {
        recommendations.push(
            "Concentrez-vous sur l'essentiel pour identifier vos priorités claires".to_string(),
        );
    }

    let mut insights: Vec<String> = [
        "Votre pratique de journalisation renforce votre intelligence émotionnelle et votre conscience de soi",
        "Chaque entrée contribue à construire une compréhension plus profonde de vos patterns mentaux",
        "L'écriture régulière développe votre capacité à naviguer dans les complexités émotionnelles",
    ]
    .map(String::from)
    .to_vec();
    if stats.total_entries > 20 {
        insights.push(
            "Votre persévérance démontre un engagement profond envers votre développement personnel"
                .to_string(),
        );
    }
    if stats.consistency_score > 0.7 {
        insights.push(
            "Votre régularité crée une base solide pour la croissance et l'auto-réflexion"
                .to_string(),
        );
    }
    if (-0.1..=0.1).contains(&stats.average_mood) {
        insights.push(
            "Votre stabilité émotionnelle témoigne d'une bonne régulation interne".to_string(),
        );
    }

    trends.truncate(MAX_ITEMS);
    patterns.truncate(MAX_ITEMS);
    recommendations.truncate(MAX_ITEMS);
    insights.truncate(MAX_ITEMS);

    InsightBundle {
        trends,
        patterns,
        recommendations,
        psychological_insights: insights,
        ai_generated: false,
        confidence_score: 0.85,
    }
}

fn trend_phrases(average_mood: f64) -> [&'static str; 3] {
    if average_mood > 0.3 {
        [
            "Tendance émotionnelle très positive dans vos écrits récents",
            "Énergie et optimisme en progression constante",
            "Équilibre général dans votre perspective quotidienne",
        ]
    } else if average_mood > 0.1 {
        [
            "Humeur globalement positive avec des moments de réflexion",
            "Stabilité émotionnelle bien établie",
            "Approche constructive des situations rencontrées",
        ]
    } else if average_mood < -0.3 {
        [
            "Période d'introspection profonde et d'expression authentique",
            "Recherche de sens dans les défis actuels",
            "Expression émotionnelle intense et réfléchie",
        ]
    } else if average_mood < -0.1 {
        [
            "Moments de réflexion sur les difficultés rencontrées",
            "Expression honnête des émotions complexes",
            "Recherche d'équilibre émotionnel",
        ]
    } else {
        [
            "Stabilité émotionnelle remarquable",
            "Équilibre entre réflexion et action",
            "Consistance dans l'expression de vos pensées",
        ]
    }
}

fn pattern_phrases(consistency: f64) -> [&'static str; 3] {
    if consistency > 0.8 {
        [
            "Excellente discipline d'écriture quotidienne",
            "Routine bien ancrée et productive",
            "Engagement remarquable dans votre pratique",
        ]
    } else if consistency > 0.6 {
        [
            "Régularité soutenue dans votre journalisation",
            "Rythme d'écriture adapté à votre style de vie",
            "Consistance bénéfique pour la réflexion",
        ]
    } else if consistency > 0.4 {
        [
            "Équilibre entre écriture régulière et spontanée",
            "Adaptation flexible de votre routine",
            "Approche organique de la journalisation",
        ]
    } else {
        [
            "Écriture guidée par l'inspiration du moment",
            "Opportunité de développer une routine plus stable",
            "Flexibilité dans votre expression personnelle",
        ]
    }
}

/// Up to two extra pattern phrases keyed on the recurring themes.
fn theme_pattern_phrases(top_themes: &[String]) -> Vec<String> {
    let themes = top_themes.join(" ").to_lowercase();
    let table: [(&[&str], &str); 5] = [
        (
            &["work", "travail", "profession"],
            "Focus marqué sur les aspects professionnels",
        ),
        (
            &["family", "famille", "parent"],
            "Attention particulière aux relations familiales",
        ),
        (
            &["friend", "ami", "social"],
            "Importance des relations sociales",
        ),
        (
            &["health", "santé", "sport"],
            "Préoccupation pour le bien-être physique",
        ),
        (
            &["study", "étude", "apprentissage"],
            "Engagement dans le développement des connaissances",
        ),
    ];

    table
        .iter()
        .filter(|(keys, _)| keys.iter().any(|k| themes.contains(k)))
        .map(|(_, phrase)| phrase.to_string())
        .take(2)
        .collect()
}

fn entry_count_recommendations(total_entries: u32) -> [&'static str; 3] {
    if total_entries < 5 {
        [
            "Fixez-vous un objectif de 2-3 entrées par semaine pour établir une routine",
            "Explorez différents formats : listes, lettres à vous-même, ou dialogues",
            "Essayez d'écrire à différents moments de la journée pour découvrir vos préférences",
        ]
    } else if total_entries < 15 {
        [
            "Capitalisez sur votre engagement en variant les thèmes d'écriture",
            "Relisez occasionnellement vos anciennes entrées pour mesurer votre progression",
            "Expérimentez avec l'écriture libre pour explorer de nouvelles perspectives",
        ]
    } else {
        [
            "Approfondissez vos thèmes récurrents pour des insights plus riches",
            "Créez des rituels d'écriture autour de vos moments clés de la journée",
            "Envisagez d'intégrer des éléments créatifs comme des dessins ou citations",
        ]
    }
}

use romanz_morph::split_template_name;
use romanz_protocol::{fold, Verb};

/// A guessed template for an infinitive missing from the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub template: String,
    /// Confidence in `[0, 1]`.
    pub score: f32,
}

/// Fallback consulted once per lookup that misses the dataset.
pub trait TemplatePredictor: Send + Sync {
    fn predict(&self, infinitive: &str) -> Option<Prediction>;
}

/// Picks the template of the known verb sharing the longest tail with the
/// unknown infinitive, among templates whose ending fits it.
pub struct SuffixPredictor {
    entries: Vec<(String, String)>,
}

impl SuffixPredictor {
    pub fn from_verbs<'a>(verbs: impl IntoIterator<Item = &'a Verb>) -> Self {
        Self {
            entries: verbs
                .into_iter()
                .filter(|v| !v.predicted)
                .map(|v| (fold(&v.infinitive), v.template.clone()))
                .collect(),
        }
    }
}

fn common_suffix_len(a: &str, b: &str) -> usize {
    a.chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

impl TemplatePredictor for SuffixPredictor {
    fn predict(&self, infinitive: &str) -> Option<Prediction> {
        let target = fold(infinitive);
        let mut best: Option<(usize, &str)> = None;

        for (known, template) in &self.entries {
            let Ok((_, ending)) = split_template_name(template) else {
                continue;
            };
            if !infinitive.ends_with(ending) {
                continue;
            }
            let shared = common_suffix_len(&target, known);
            if best.map_or(true, |(len, _)| shared > len) {
                best = Some((shared, template.as_str()));
            }
        }

        let length = target.chars().count().max(1);
        best.map(|(shared, template)| Prediction {
            template: template.to_string(),
            score: (shared as f32 / length as f32).min(1.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predictor() -> SuffixPredictor {
        let verbs = [
            Verb::new("aimer", "aim:er"),
            Verb::new("manger", "man:ger"),
            Verb::new("finir", "fin:ir"),
        ];
        SuffixPredictor::from_verbs(&verbs)
    }

    #[test]
    fn test_longest_tail_wins() {
        let prediction = predictor().predict("ranger").unwrap();
        assert_eq!(prediction.template, "man:ger");
        assert!((prediction.score - 5.0 / 6.0).abs() < f32::EPSILON);

        assert_eq!(predictor().predict("chanter").unwrap().template, "aim:er");
        assert_eq!(predictor().predict("choisir").unwrap().template, "fin:ir");
    }

    #[test]
    fn test_no_fitting_ending() {
        assert_eq!(predictor().predict("prendre"), None);
    }
}

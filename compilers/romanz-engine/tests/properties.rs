mod common;

use std::sync::Arc;
use std::thread;

use common::{conjugator, forms, load, single, LANGS};
use romanz_engine::{
    dataset, AlternatesMode, ConjugateOptions, Conjugator, Inflection, Lang, Repository, SuffixPredictor,
};

#[test]
fn test_every_fixture_verb_conjugates() {
    for lang in LANGS {
        let conjugator = conjugator(lang);
        let inflector = conjugator.inflector();

        for verb in conjugator.repository().verbs() {
            let template = conjugator.repository().find_template(&verb.template).unwrap();
            let conjugation = conjugator
                .conjugate(&verb.infinitive, &ConjugateOptions::default())
                .unwrap_or_else(|e| panic!("{} {}: {}", lang, verb.infinitive, e));

            assert_eq!(conjugation.verb.infinitive, verb.infinitive);
            assert_eq!(conjugation.moods.len(), template.moods.len());

            for mood in &template.moods {
                let tenses = &conjugation.moods[&mood.name];
                for tense in &mood.tenses {
                    let forms = &tenses[&tense.name];
                    assert_eq!(forms.len(), tense.person_endings.len(), "{} {} {}", verb.infinitive, mood.name, tense.name);
                    assert!(single(forms).iter().all(|f| !f.is_empty()));

                    let alone = conjugator
                        .conjugate_mood_tense(&verb.infinitive, &mood.name, &tense.name, &ConjugateOptions::default())
                        .unwrap();
                    assert_eq!(&alone, forms);
                }
                for compound in inflector.compound_tenses().iter().filter(|c| c.mood == mood.name) {
                    assert!(tenses.contains_key(compound.tense), "{} missing {}", verb.infinitive, compound.tense);
                }
            }
        }
    }
}

#[test]
fn test_conjugation_is_deterministic() {
    for lang in LANGS {
        let first = conjugator(lang);
        let second = conjugator(lang);
        for verb in first.repository().verbs() {
            let options = ConjugateOptions::default();
            let a = first.conjugate(&verb.infinitive, &options).unwrap();
            assert_eq!(a, first.conjugate(&verb.infinitive, &options).unwrap());
            assert_eq!(a, second.conjugate(&verb.infinitive, &options).unwrap());
        }
    }
}

#[test]
fn test_moods_keep_declaration_order() {
    let fr = conjugator(Lang::Fr);
    let conjugation = fr.conjugate("manger", &ConjugateOptions::default()).unwrap();
    let moods: Vec<&str> = conjugation.moods.keys().map(String::as_str).collect();
    assert_eq!(moods, ["infinitif", "indicatif", "subjonctif", "conditionnel", "imperatif", "participe"]);

    let indicatif: Vec<&str> = conjugation.moods["indicatif"].keys().map(String::as_str).collect();
    assert_eq!(
        indicatif,
        [
            "présent",
            "imparfait",
            "futur-simple",
            "passé-simple",
            "passé-composé",
            "plus-que-parfait",
            "futur-antérieur",
            "passé-antérieur"
        ]
    );
    assert_eq!(conjugation.verb.template, "man:ger");
    assert_eq!(conjugation.verb.stem, "man");
    assert_eq!(conjugation.verb.translation.as_deref(), Some("to eat"));
}

#[test]
fn test_alternates_cardinality() {
    let fr = conjugator(Lang::Fr);
    let all = ConjugateOptions::default().include_alternates(true);
    let presente = fr.conjugate_mood_tense("payer", "indicatif", "présent", &all).unwrap();

    assert_eq!(presente[0], Inflection::Variants(vec!["je paie".into(), "je paye".into()]));
    assert_eq!(presente[3], Inflection::Variants(vec!["nous payons".into()]));

    let template = fr.repository().find_template("pa:yer").unwrap();
    let tense = template.tense("indicatif", "présent").unwrap();
    for (inflection, person_ending) in presente.iter().zip(&tense.person_endings) {
        assert_eq!(inflection.forms().len(), person_ending.endings.len());
    }

    let second = ConjugateOptions {
        alternates: AlternatesMode::Second,
        ..ConjugateOptions::default()
    };
    assert_eq!(forms(&fr, "payer", "indicatif", "futur-simple", &second)[0], "je payerai");
    assert_eq!(forms(&fr, "payer", "indicatif", "présent", &ConjugateOptions::default())[0], "je paie");

    // Compounds multiply auxiliary and participle spellings
    let passe = fr.conjugate_mood_tense("payer", "indicatif", "passé-composé", &all).unwrap();
    assert_eq!(passe[0], Inflection::Variants(vec!["j'ai payé".into()]));
}

#[test]
fn test_shared_across_threads() {
    let fr = Arc::new(conjugator(Lang::Fr));
    let expected = fr.conjugate("aller", &ConjugateOptions::default()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let fr = Arc::clone(&fr);
            thread::spawn(move || fr.conjugate("aller", &ConjugateOptions::default()).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_archive_round_trip() {
    for lang in LANGS {
        let source = load(lang);
        let bytes = dataset::to_archive(&source).unwrap();
        let restored = dataset::load_archive(&bytes).unwrap();
        assert_eq!(restored.lang, lang);
        assert_eq!(restored.verbs, source.verbs);

        let from_archive = Conjugator::new(lang, Repository::new(restored).unwrap()).unwrap();
        let from_json = conjugator(lang);
        for verb in from_json.repository().verbs() {
            assert_eq!(
                from_archive.conjugate(&verb.infinitive, &ConjugateOptions::default()).unwrap(),
                from_json.conjugate(&verb.infinitive, &ConjugateOptions::default()).unwrap()
            );
        }
    }
}

#[test]
fn test_predicted_verb() {
    let source = load(Lang::Fr);
    let predictor = SuffixPredictor::from_verbs(&source.verbs);
    let repository = Repository::new(source).unwrap().with_predictor(predictor);
    let fr = Conjugator::new(Lang::Fr, repository).unwrap();

    let conjugation = fr.conjugate("chanter", &ConjugateOptions::default()).unwrap();
    assert!(conjugation.verb.predicted);
    assert_eq!(conjugation.verb.template, "aim:er");
    assert!(conjugation.verb.pred_score > 0.0 && conjugation.verb.pred_score <= 1.0);
    assert_eq!(
        single(conjugation.tense("indicatif", "présent").unwrap())[0],
        "je chante"
    );
}

#[test]
fn test_diacritic_insensitive_lookup() {
    let fr = conjugator(Lang::Fr);
    let conjugation = fr.conjugate("etre", &ConjugateOptions::default()).unwrap();
    assert_eq!(conjugation.verb.infinitive, "être");
    assert_eq!(fr.repository().verbs_starting_with("E", 5), ["être"]);
}

#[test]
fn test_conjugation_serializes_to_json() {
    let fr = conjugator(Lang::Fr);
    let conjugation = fr.conjugate("manger", &ConjugateOptions::default()).unwrap();
    let value = serde_json::to_value(&conjugation).unwrap();

    assert_eq!(value["verb"]["infinitive"], "manger");
    assert_eq!(value["moods"]["indicatif"]["présent"][0], "je mange");

    let all = ConjugateOptions::default().include_alternates(true);
    let payer = serde_json::to_value(fr.conjugate("payer", &all).unwrap()).unwrap();
    assert_eq!(payer["moods"]["indicatif"]["présent"][0], serde_json::json!(["je paie", "je paye"]));
}

#[test]
fn test_options_from_json() {
    let options: ConjugateOptions = serde_json::from_str(r#"{ "gender": "feminine", "conjugate_pronouns": false }"#).unwrap();
    assert_eq!(options.gender, romanz_engine::Gender::Feminine);
    assert!(!options.conjugate_pronouns);
    assert_eq!(options.alternates, AlternatesMode::First);
}

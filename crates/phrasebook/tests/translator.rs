//! Integration tests for Translator construction and translation.

use phrasebook::{
    ContextWrapper, PhraseNode, Phrases, TranslationStore, Translator, context, phrases,
};

fn days() -> TranslationStore {
    TranslationStore::from([
        ("en", phrases! { "today_is" => "Today is {day}" }),
        ("es", phrases! { "today_is" => "Hoy es {day}" }),
    ])
}

// =========================================================================
// Builder and Basic API
// =========================================================================

#[test]
fn translator_default_is_english_with_percent_wrapper() {
    let translator = Translator::default();
    assert_eq!(translator.default_language(), "en");
    assert_eq!(translator.context_wrapper(), &ContextWrapper::symmetric("%"));
    assert!(translator.translations().languages().is_empty());
}

#[test]
fn translator_new_keeps_defaults() {
    let translator = Translator::new(days());
    assert_eq!(translator.default_language(), "en");
    assert_eq!(translator.translations().languages(), vec!["en", "es"]);
}

#[test]
fn translator_builder_sets_everything() {
    let translator = Translator::builder()
        .translations(days())
        .default_language("es")
        .context_wrapper(["{", "}"])
        .build();

    assert_eq!(translator.default_language(), "es");
    assert_eq!(translator.context_wrapper(), &ContextWrapper::pair("{", "}"));
    assert_eq!(
        translator.translate_with("today_is", &context! { "day" => "lunes" }),
        "Hoy es lunes"
    );
}

#[test]
fn set_default_language_changes_current() {
    let mut translator = Translator::new(days());
    translator.set_default_language("es");
    assert_eq!(translator.default_language(), "es");
    assert_eq!(translator.translate("today_is"), "Hoy es {day}");
}

#[test]
fn set_default_language_accepts_unknown_language() {
    let mut translator = Translator::new(days());
    translator.set_default_language("xx");
    assert_eq!(translator.default_language(), "xx");
    assert_eq!(translator.translate("today_is"), "today_is");
}

// =========================================================================
// Translation
// =========================================================================

#[test]
fn end_to_end_with_brace_wrapper() {
    let translator = Translator::builder()
        .translations(days())
        .context_wrapper(ContextWrapper::pair("{", "}"))
        .build();

    let ctx = context! { "day" => "monday" };
    assert_eq!(
        translator.translate_with_in("today_is", &ctx, "es"),
        "Hoy es monday"
    );
    assert_eq!(
        translator.translate_with("today_is", &ctx),
        "Today is monday"
    );
}

#[test]
fn translate_in_uses_given_language() {
    let translator = Translator::new(days());
    assert_eq!(translator.translate_in("today_is", "es"), "Hoy es {day}");
    assert_eq!(translator.translate_in("today_is", "en"), "Today is {day}");
}

#[test]
fn dotted_keys_reach_nested_phrases() {
    let translator = Translator::new([(
        "en",
        phrases! {
            "phrases" => phrases! {
                "today_is" => "Today is %day%",
                "greetings" => phrases! { "morning" => "Good morning" },
            },
        },
    )]);

    assert_eq!(
        translator.translate_with("phrases.today_is", &context! { "day" => "Friday" }),
        "Today is Friday"
    );
    assert_eq!(
        translator.translate("phrases.greetings.morning"),
        "Good morning"
    );
}

#[test]
fn unresolved_key_is_returned_verbatim() {
    let translator = Translator::new(days());
    assert_eq!(translator.translate("nope"), "nope");
    assert_eq!(translator.translate("today_is.extra"), "Today is {day}");
    assert_eq!(translator.translate_in("today_is", "fr"), "today_is");
}

#[test]
fn unresolved_key_is_still_interpolated() {
    let translator = Translator::default();
    let ctx = context! { "name" => "Ada" };
    assert_eq!(
        translator.translate_with("hello %name%", &ctx),
        "hello Ada"
    );
}

#[test]
fn branch_key_returns_the_key() {
    let translator = Translator::new([("en", phrases! { "menu" => phrases! { "open" => "Open" } })]);
    assert_eq!(translator.translate("menu"), "menu");
}

// =========================================================================
// Adding Translations
// =========================================================================

#[test]
fn add_translations_merges_top_level_keys() {
    let mut translator = Translator::new([("en", phrases! { "a" => "1", "b" => "2" })]);
    translator.add_translations("en", phrases! { "b" => "3", "c" => "4" });

    let expected: Phrases = phrases! { "a" => "1", "b" => "3", "c" => "4" };
    assert_eq!(translator.translations().get("en"), Some(&expected));
}

#[test]
fn add_translations_creates_language() {
    let mut translator = Translator::default();
    translator.add_translations("de", phrases! { "hello" => "Hallo" });
    assert_eq!(translator.translate_in("hello", "de"), "Hallo");
}

#[test]
fn add_translations_replaces_nested_branches_whole() {
    let mut translator = Translator::new([(
        "en",
        phrases! { "menu" => phrases! { "open" => "Open", "close" => "Close" } },
    )]);
    translator.add_translations("en", phrases! { "menu" => phrases! { "save" => "Save" } });

    assert_eq!(translator.translate("menu.save"), "Save");
    assert_eq!(translator.translate("menu.open"), "menu.open");
}

#[test]
fn add_translations_leaves_other_languages_alone() {
    let mut translator = Translator::new(days());
    translator.add_translations("en", phrases! { "today_is" => "It is {day}" });
    assert_eq!(translator.translate_in("today_is", "es"), "Hoy es {day}");
}

#[test]
fn add_translations_accepts_any_pairs() {
    let mut translator = Translator::default();
    translator.add_translations("en", vec![("ok".to_string(), PhraseNode::leaf("OK"))]);
    assert_eq!(translator.translate("ok"), "OK");
}

// =========================================================================
// Ownership
// =========================================================================

#[test]
fn caller_data_is_copied_in() {
    let mut source = phrases! { "hello" => "Hello" };
    let mut translator = Translator::default();
    translator.add_translations("en", source.clone());

    source.insert("hello".to_string(), PhraseNode::leaf("Changed"));
    assert_eq!(translator.translate("hello"), "Hello");
}

#[test]
fn instances_do_not_share_state() {
    let mut first = Translator::default();
    let second = first.clone();
    first.add_translations("en", phrases! { "hello" => "Hello" });
    first.set_default_language("es");

    assert_eq!(second.default_language(), "en");
    assert_eq!(second.translate("hello"), "hello");
}

#[test]
fn translator_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Translator>();
}

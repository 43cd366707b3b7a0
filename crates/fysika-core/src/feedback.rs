//! Localized feedback messages.
//!
//! One static table per supported language. The grader composes its
//! feedback strings from these; callers can present them verbatim.

use crate::model::Language;

/// The feedback strings for one language.
#[derive(Debug)]
pub struct Messages {
    pub correct: &'static str,
    pub incorrect: &'static str,
    pub enter_valid_number: &'static str,
    pub select_unit: &'static str,
    pub number_correct_unit_wrong: &'static str,
    pub correct_unit_is: &'static str,
    pub accepted_range: &'static str,
    pub invalid_correct_answer: &'static str,
}

static EN: Messages = Messages {
    correct: "Correct!",
    incorrect: "Incorrect. The correct answer is",
    enter_valid_number: "Please enter a valid number.",
    select_unit: "Please select a unit for your answer.",
    number_correct_unit_wrong: "Your number is correct, but the unit is wrong.",
    correct_unit_is: "The correct unit is",
    accepted_range: "accepted range",
    invalid_correct_answer: "Error: invalid correct answer in question data.",
};

static NL: Messages = Messages {
    correct: "Goed!",
    incorrect: "Fout. Het juiste antwoord is",
    enter_valid_number: "Voer een geldig getal in.",
    select_unit: "Selecteer een eenheid voor je antwoord.",
    number_correct_unit_wrong: "Je getal is goed, maar de eenheid is fout.",
    correct_unit_is: "De juiste eenheid is",
    accepted_range: "toegestane marge",
    invalid_correct_answer: "Fout: ongeldig antwoord in de vraagdata.",
};

/// The message table for a language.
pub fn messages(language: Language) -> &'static Messages {
    match language {
        Language::En => &EN,
        Language::Nl => &NL,
    }
}

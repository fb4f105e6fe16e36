//! Render-ready description of the companion form.
//!
//! The view is plain data: two sections of fields, each carrying its label,
//! help text, placeholder, widget, current value and error, plus the submit
//! button. Clients draw it however they like.

use serde::Serialize;

use super::schema::Field;
use super::state::{CompanionForm, FormMode};
use crate::companion::Category;

pub const PREAMBLE: &str = "You are an AI whose name is Richard Feynman. You possess the same insatiable curiosity, \
boundless enthusiasm, and knack for simplifying complex concepts as the legendary physicist himself. As Richard \
Feynman, your mission is to engage in conversations, share your insights into the wonders of the universe, and \
inspire others with your unique approach to science and life. Your dialogue is characterized by a playful yet \
profound tone, peppered with anecdotes, analogies, and a relentless pursuit of understanding. Whether you're \
discussing quantum mechanics, biology, or the art of picking locks, you approach each topic with the same \
infectious enthusiasm and desire to uncover the underlying principles. Channel your inner Feynman and let your \
curiosity guide the conversation!";

pub const SEED_CHAT: &str = "\
Feynman: You know, when I tackle a problem, I always try to simplify it as much as possible...
Human: That's fascinating, Dr. Feynman. How do you manage to do that?
Feynman: Well, it's all about breaking it down into its fundamental components, seeing the underlying principles at play.
Human: Ah, so it's like finding the essence of the problem?
Feynman: Exactly! Once you grasp the essence, the rest falls into place.
Human: Your ability to explain complex concepts with such clarity is truly remarkable.
Feynman: Thank you! I've always believed that if you can't explain something simply, then you don't really understand it.
Human: That's a profound insight.
Feynman: It's served me well throughout my career. It's all about curiosity and a willingness to question everything.
Human: Your lectures were legendary. You had a way of captivating your audience.
Feynman: I always tried to make them fun and engaging. Learning should be an adventure!
Human: You've inspired so many with your approach to science and life.
Feynman: That's all I ever wanted. To show people the beauty of the universe and the joy of discovery.";

const TEXTAREA_ROWS: u8 = 7;
const CATEGORY_PLACEHOLDER: &str = "Select a category";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Widget {
    Image,
    Input,
    Select { options: Vec<SelectOption> },
    Textarea { rows: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: Field,
    pub label: Option<&'static str>,
    pub description: Option<&'static str>,
    pub placeholder: Option<&'static str>,
    pub widget: Widget,
    pub value: Option<String>,
    pub error: Option<&'static str>,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanionFormView {
    pub mode: FormMode,
    pub sections: Vec<SectionView>,
    pub submit: SubmitButton,
}

impl CompanionFormView {
    /// Find a field anywhere in the form.
    #[must_use]
    pub fn field(&self, name: Field) -> Option<&FieldView> {
        self.sections.iter().flat_map(|s| s.fields.iter()).find(|f| f.name == name)
    }
}

// =============================================================================
// RENDER
// =============================================================================

/// Static text attached to a field.
struct FieldText {
    label: Option<&'static str>,
    description: Option<&'static str>,
    placeholder: Option<&'static str>,
}

fn field_text(field: Field) -> FieldText {
    match field {
        Field::Src => FieldText { label: None, description: None, placeholder: None },
        Field::Name => FieldText {
            label: Some("Name"),
            description: Some("This is the name of your language companion."),
            placeholder: Some("Richard Feynman"),
        },
        Field::Description => FieldText {
            label: Some("Description"),
            description: Some("Short description for your language companion."),
            placeholder: Some("A brilliant 20th century physicist"),
        },
        Field::CategoryId => FieldText {
            label: Some("Category"),
            description: Some("Select the category for your language companion."),
            placeholder: Some(CATEGORY_PLACEHOLDER),
        },
        Field::Instructions => FieldText {
            label: Some("Instructions"),
            description: Some("Describe in detail your companion's backstory and relevant details."),
            placeholder: Some(PREAMBLE),
        },
        Field::Seed => FieldText {
            label: Some("Example Conversations"),
            description: Some("Describe in detail your companion's backstory and relevant details."),
            placeholder: Some(SEED_CHAT),
        },
    }
}

fn widget_for(field: Field, categories: &[Category]) -> Widget {
    match field {
        Field::Src => Widget::Image,
        Field::Name | Field::Description => Widget::Input,
        Field::CategoryId => Widget::Select {
            options: categories
                .iter()
                .map(|c| SelectOption { value: c.id.clone(), label: c.name.clone() })
                .collect(),
        },
        Field::Instructions | Field::Seed => Widget::Textarea { rows: TEXTAREA_ROWS },
    }
}

fn field_view(form: &CompanionForm, field: Field, categories: &[Category]) -> FieldView {
    let text = field_text(field);
    FieldView {
        name: field,
        label: text.label,
        description: text.description,
        placeholder: text.placeholder,
        widget: widget_for(field, categories),
        value: field.value(form.values()).map(str::to_owned),
        error: form.errors().get(field),
        disabled: form.is_loading(),
    }
}

/// Describe `form` as it should be drawn, offering `categories` in the
/// category select.
#[must_use]
pub fn render(form: &CompanionForm, categories: &[Category]) -> CompanionFormView {
    let fields = |names: &[Field]| -> Vec<FieldView> {
        names.iter().map(|&f| field_view(form, f, categories)).collect()
    };

    let sections = vec![
        SectionView {
            title: "Generation Information",
            description: "Gives the information of your companion",
            fields: fields(&[Field::Src, Field::Name, Field::Description, Field::CategoryId]),
        },
        SectionView {
            title: "Configuration",
            description: "Detailed instructions for your language companion.",
            fields: fields(&[Field::Instructions, Field::Seed]),
        },
    ];

    let label = match form.mode() {
        FormMode::Create => "Create your companion",
        FormMode::Edit => "Edit your companion",
    };

    CompanionFormView {
        mode: form.mode(),
        sections,
        submit: SubmitButton { label, disabled: form.is_loading() },
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;

//! Board Variants and Labels
//!
//! The board ships in two flavours: Portuguese with 0-5 comment ratings, and
//! English without. Both are the same board parameterized by [`BoardSettings`].

use serde::{Deserialize, Serialize};

/// Language of the user-facing strings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Portuguese,
    English,
}

impl Language {
    /// Parse a config/env value ("pt", "pt-BR", "portuguese", "en", ...)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pt" | "pt-br" | "pt_br" | "portuguese" => Some(Language::Portuguese),
            "en" | "en-us" | "en_us" | "english" => Some(Language::English),
            _ => None,
        }
    }
}

/// Settings selecting the board variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSettings {
    /// Comments carry and display a 0-5 rating
    pub ratings_enabled: bool,
    pub language: Language,
}

impl BoardSettings {
    /// Portuguese board with comment ratings
    pub fn rated() -> Self {
        Self {
            ratings_enabled: true,
            language: Language::Portuguese,
        }
    }

    /// English board without ratings
    pub fn plain() -> Self {
        Self {
            ratings_enabled: false,
            language: Language::English,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        Labels::for_language(self.language)
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self::rated()
    }
}

/// Every user-facing string of the board
#[derive(Debug)]
pub struct Labels {
    pub form_heading: &'static str,
    pub list_heading: &'static str,
    pub title_field: &'static str,
    pub description_field: &'static str,
    pub add_image: &'static str,
    pub add_moment: &'static str,
    pub update_moment: &'static str,
    pub comments_heading: &'static str,
    pub username_field: &'static str,
    pub comment_field: &'static str,
    pub rating_field: &'static str,
    pub add_comment: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub image_alt: &'static str,
    pub empty_list: &'static str,
    rating_scale: [&'static str; 6],
}

static PORTUGUESE: Labels = Labels {
    form_heading: "Adicionar Moments",
    list_heading: "Moments",
    title_field: "Titulo do Moment",
    description_field: "Descrição do Moment",
    add_image: "Adicionar Imagem",
    add_moment: "Adicionar Moment",
    update_moment: "Atualizar Moment",
    comments_heading: "Comentários:",
    username_field: "Usuário",
    comment_field: "Comentário",
    rating_field: "Avaliação:",
    add_comment: "Adicionar Comentário",
    edit: "Editar",
    delete: "Deletar",
    image_alt: "Imagem do Moment",
    empty_list: "Nenhum moment ainda.",
    rating_scale: ["Péssimo", "Não é bom", "Ruim", "Bom", "Muito bom", "Excelente"],
};

static ENGLISH: Labels = Labels {
    form_heading: "Add Moments",
    list_heading: "Moments",
    title_field: "Moment title",
    description_field: "Moment description",
    add_image: "Add Image",
    add_moment: "Add Moment",
    update_moment: "Update Moment",
    comments_heading: "Comments:",
    username_field: "Username",
    comment_field: "Comment",
    rating_field: "Rating:",
    add_comment: "Add Comment",
    edit: "Edit",
    delete: "Delete",
    image_alt: "Moment Image",
    empty_list: "No moments yet.",
    rating_scale: ["Terrible", "Not good", "Bad", "Good", "Very good", "Excellent"],
};

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::Portuguese => &PORTUGUESE,
            Language::English => &ENGLISH,
        }
    }

    /// Caption of the moment form's submit button
    pub fn submit_moment(&self, editing: bool) -> &'static str {
        if editing {
            self.update_moment
        } else {
            self.add_moment
        }
    }

    /// Label for a 0-5 rating; empty for anything outside the scale
    pub fn rating(&self, rate: i64) -> &'static str {
        usize::try_from(rate)
            .ok()
            .and_then(|idx| self.rating_scale.get(idx))
            .copied()
            .unwrap_or("")
    }
}

/// Highest rating a comment can carry
pub const MAX_RATING: u8 = 5;

/// Shorthand for `Labels::for_language(language).rating(rate)`
pub fn rating_label(rate: i64, language: Language) -> &'static str {
    Labels::for_language(language).rating(rate)
}

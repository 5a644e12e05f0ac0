use crate::editor::EditForm;

/// The modal window currently shown over the game list, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    None,
    Info {
        title: String,
        message: String,
    },
    Error {
        title: String,
        message: String,
    },
    Edit {
        index: usize,
        form: EditForm,
    },
}

impl Dialog {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Info {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// What the user did with the edit window this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Open,
    Save,
    Cancel,
}

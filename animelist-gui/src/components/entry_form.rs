use animelist_lib::FormState;
use iced::{
    Element,
    Length::Fill,
    Task,
    widget::{button, column, text, text_editor, text_input},
};

const NAME_PLACEHOLDER: &str = "Anime name";
const COMMENT_PLACEHOLDER: &str = "Why you love this anime";

#[derive(Debug, Clone)]
pub enum Message {
    NameInput(String),
    CommentEdited(text_editor::Action),
    SubmitPressed,
}

/// Action used for communicating with the parent component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    NameChanged(String),
    CommentChanged(String),
    Submit,
}

/// The "add entry" form.
///
/// The typed text itself lives in the [`FormState`] of the editor; this component only keeps
/// the multi-line editor buffer needed to render the comment field.
pub struct EntryForm {
    comment: text_editor::Content,
}

impl EntryForm {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                comment: text_editor::Content::new(),
            },
            Task::none(),
        )
    }

    /// Reset the comment buffer after a successful submission
    pub fn clear(&mut self) {
        self.comment = text_editor::Content::new();
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::NameInput(content) => Action::NameChanged(content),
            Message::CommentEdited(action) => {
                let is_edit = action.is_edit();
                self.comment.perform(action);

                if is_edit {
                    Action::CommentChanged(self.comment.text())
                } else {
                    Action::None
                }
            }
            Message::SubmitPressed => Action::Submit,
        }
    }

    pub fn view<'a>(&'a self, form: &'a FormState) -> Element<'a, Message> {
        let mut name = column![
            text_input(NAME_PLACEHOLDER, form.name())
                .on_input(Message::NameInput)
                .on_submit(Message::SubmitPressed)
                .padding(8)
        ]
        .spacing(4);

        if let Some(error) = form.error() {
            name = name.push(text(error.to_string()).size(14).style(text::danger));
        }

        column![
            name,
            text_editor(&self.comment)
                .placeholder(COMMENT_PLACEHOLDER)
                .on_action(Message::CommentEdited)
                .padding(8)
                .height(80),
            button(text("Add Anime").width(Fill).center())
                .width(Fill)
                .on_press(Message::SubmitPressed),
        ]
        .spacing(16)
        .into()
    }
}

#[cfg(test)]
mod test {
    use super::{Action, EntryForm, Message};

    #[test]
    fn test_name_input() {
        let (mut form, _) = EntryForm::new();

        assert_eq!(
            form.update(Message::NameInput("Mononoke".into())),
            Action::NameChanged("Mononoke".into())
        );
    }

    #[test]
    fn test_submit() {
        let (mut form, _) = EntryForm::new();

        assert_eq!(form.update(Message::SubmitPressed), Action::Submit);
    }
}

use std::{path::PathBuf, sync::Arc};

use animelist_lib::ListEditor;
use clap::Parser;
use iced::{
    Element, Event,
    Length::Fill,
    Subscription, Task, Theme, application, event, mouse,
    widget::{column, container, text},
    window,
};
use parking_lot::RwLock;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{
        entry_form::{self, EntryForm},
        entry_list::{self, EntryList},
    },
    config::{Cfg, GuiConfig},
};

pub mod components;
pub mod config;
pub mod icons;

const TITLE: &str = "My Favorite Anime List";

#[derive(Parser, Debug, Clone)]
#[command(name = "animelist")]
#[command(author, version, about)]
struct Cli {
    /// Override the configured theme
    #[arg(short, long, value_enum)]
    theme: Option<config::Theme>,

    /// Read the configuration from this file instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> iced::Result {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // Logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    application(move || App::new(cli.clone()), App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .subscription(App::subscription)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    WindowResized(f32),
    // Components
    EntryForm(entry_form::Message),
    EntryList(entry_list::Message),
}

struct App {
    title: String,
    cfg: Cfg,
    editor: ListEditor,
    // Components
    entry_form: EntryForm,
    entry_list: EntryList,
}

impl App {
    fn new(cli: Cli) -> (Self, Task<Message>) {
        let path = match cli.config {
            Some(path) => Some(path),
            None => GuiConfig::default_path()
                .inspect_err(|e| warn!("{e}, using the default configuration"))
                .ok(),
        };

        let mut gui_config = path
            .map(|path| GuiConfig::load(&path))
            .unwrap_or_default();
        if let Some(theme) = cli.theme {
            gui_config.theme = theme;
        }

        let cfg = Arc::new(RwLock::new(gui_config));

        let (entry_form, entry_form_task) = EntryForm::new();
        let (entry_list, entry_list_task) = EntryList::new(cfg.clone());

        (
            Self {
                title: TITLE.into(),
                cfg,
                editor: ListEditor::new(),
                entry_form,
                entry_list,
            },
            Task::batch([
                entry_form_task.map(Message::EntryForm),
                entry_list_task.map(Message::EntryList),
            ]),
        )
    }

    // Update application state based on messages passed by view()
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowResized(width) => {
                self.entry_list
                    .update(&self.editor, entry_list::Message::Resized(width));
            }
            Message::EntryForm(message) => match self.entry_form.update(message) {
                entry_form::Action::None => {}
                entry_form::Action::NameChanged(name) => self.editor.set_name(name),
                entry_form::Action::CommentChanged(comment) => self.editor.set_comment(comment),
                entry_form::Action::Submit => match self.editor.submit() {
                    Ok(entry) => {
                        self.entry_form.clear();
                        self.entry_list
                            .update(&self.editor, entry_list::Message::EntryAdded(entry.id()));
                    }
                    Err(e) => debug!("Rejected submission: {e}"),
                },
            },
            Message::EntryList(message) => match self.entry_list.update(&self.editor, message) {
                entry_list::Action::None => {}
                entry_list::Action::Reorder(order) => {
                    if let Err(e) = self.editor.reorder(&order) {
                        warn!("Ignoring reorder: {e}");
                    }
                }
                entry_list::Action::Delete(id) => {
                    self.editor.delete(id);
                }
            },
        }

        Task::none()
    }

    // Render the application and pass along messages from components to update()
    fn view(&self) -> Element<'_, Message> {
        let content = column![
            text(TITLE).size(28).width(Fill).center(),
            self.entry_form
                .view(self.editor.form())
                .map(Message::EntryForm),
            self.entry_list.view(&self.editor).map(Message::EntryList),
        ]
        .spacing(24)
        .max_width(672);

        container(content).center_x(Fill).padding(24).into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![
            window::resize_events().map(|(_id, size)| Message::WindowResized(size.width)),
            event::listen_with(pointer_released),
        ];

        if self.entry_list.is_animating() {
            subscriptions.push(
                window::frames().map(|now| Message::EntryList(entry_list::Message::Tick(now))),
            );
        }

        Subscription::batch(subscriptions)
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn theme(&self) -> Theme {
        self.cfg.read().theme()
    }
}

// A drag ends wherever the button is let go, including outside the list or the window
fn pointer_released(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::EntryList(entry_list::Message::DragEnded))
        }
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use animelist_lib::{EntryId, Error};
    use iced::{Event, event, mouse, window};
    use tempfile::{TempDir, tempdir};

    use super::{App, Cli, Message, config::Theme, pointer_released};
    use crate::components::{entry_form, entry_list};

    fn app() -> (App, TempDir) {
        let dir = tempdir().unwrap();
        let cli = Cli {
            theme: None,
            config: Some(dir.path().join("gui.toml")),
        };

        (App::new(cli).0, dir)
    }

    fn add(app: &mut App, name: &str) {
        let _ = app.update(Message::EntryForm(entry_form::Message::NameInput(
            name.into(),
        )));
        let _ = app.update(Message::EntryForm(entry_form::Message::SubmitPressed));
    }

    fn ids(app: &App) -> Vec<EntryId> {
        app.editor.entries().iter().map(|e| e.id()).collect()
    }

    fn names(app: &App) -> Vec<&str> {
        app.editor
            .entries()
            .iter()
            .map(|e| e.name().as_str())
            .collect()
    }

    #[test]
    fn test_add_entries() {
        let (mut app, _dir) = app();

        add(&mut app, "Naruto");
        add(&mut app, "  Bleach ");

        assert_eq!(names(&app), ["Naruto", "Bleach"]);
        assert!(app.editor.form().name().is_empty());
    }

    #[test]
    fn test_empty_name_shows_error() {
        let (mut app, _dir) = app();

        add(&mut app, "   ");

        assert!(app.editor.entries().is_empty());
        assert_eq!(app.editor.form().error(), Some(Error::NameRequired));
    }

    #[test]
    fn test_drag_and_delete() {
        let (mut app, _dir) = app();
        for name in ["A", "B", "C"] {
            add(&mut app, name);
        }
        let [a, b, c]: [EntryId; 3] = ids(&app).try_into().unwrap();

        let _ = app.update(Message::EntryList(entry_list::Message::DragStarted(c)));
        let _ = app.update(Message::EntryList(entry_list::Message::DragEntered(0)));
        let _ = app.update(Message::EntryList(entry_list::Message::DragEnded));

        assert_eq!(ids(&app), [c, a, b]);

        let _ = app.update(Message::EntryList(entry_list::Message::DeletePressed(a)));

        assert_eq!(names(&app), ["C", "B"]);
    }

    #[test]
    fn test_release_outside_list_ends_drag() {
        let (mut app, _dir) = app();
        for name in ["A", "B", "C"] {
            add(&mut app, name);
        }
        let before = ids(&app);
        let [_, _, c]: [EntryId; 3] = before.clone().try_into().unwrap();

        let _ = app.update(Message::EntryList(entry_list::Message::DragStarted(c)));

        // Released over the form, so no card sees it
        let released = pointer_released(
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            event::Status::Ignored,
            window::Id::unique(),
        )
        .unwrap();
        let _ = app.update(released);

        // Hovering without a held button must not reorder
        let _ = app.update(Message::EntryList(entry_list::Message::DragEntered(0)));

        assert_eq!(ids(&app), before);
    }

    #[test]
    fn test_other_events_ignored() {
        let pressed = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));

        assert!(pointer_released(pressed, event::Status::Ignored, window::Id::unique()).is_none());
    }

    #[test]
    fn test_submit_starts_fade() {
        let (mut app, _dir) = app();

        add(&mut app, "Naruto");

        assert!(app.entry_list.is_animating());
    }

    #[test]
    fn test_theme_override() {
        let dir = tempdir().unwrap();
        let cli = Cli {
            theme: Some(Theme::Light),
            config: Some(dir.path().join("gui.toml")),
        };

        let (app, _) = App::new(cli);

        assert_eq!(app.theme(), iced::Theme::Light);
    }
}

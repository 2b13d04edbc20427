use std::collections::HashMap;

use animelist_lib::{
    Entry, EntryId, ListEditor,
    presentation::{EMPTY_MESSAGE, Row},
};
use iced::{
    Alignment::Center,
    Element,
    Length::Fill,
    Task, Theme, mouse,
    time::Instant,
    widget::{
        Column, button, column, container, mouse_area, row, scrollable, space, text, tooltip,
    },
    window,
};
use tracing::debug;

use crate::{
    components::entry_list::state::{DragState, FADE_DURATION, Layout, fade_progress},
    config::Cfg,
    icons::icon,
};

pub mod state;

#[derive(Debug, Clone)]
pub enum Message {
    Resized(f32),
    DragStarted(EntryId),
    /// The pointer moved onto the card at this position
    DragEntered(usize),
    DragEnded,
    DeletePressed(EntryId),
    /// A new entry was appended and should fade in
    EntryAdded(EntryId),
    Tick(Instant),
}

/// Action used for communicating with the parent component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Reorder(Vec<EntryId>),
    Delete(EntryId),
}

pub struct EntryList {
    cfg: Cfg,
    width: f32,
    drag: Option<DragState>,
    /// Entries still fading in, keyed to the moment they appeared
    fading: HashMap<EntryId, Instant>,
    now: Instant,
}

impl EntryList {
    pub fn new(cfg: Cfg) -> (Self, Task<Message>) {
        (
            Self {
                cfg,
                width: window::Settings::default().size.width,
                drag: None,
                fading: HashMap::new(),
                now: Instant::now(),
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, editor: &ListEditor, message: Message) -> Action {
        match message {
            Message::Resized(width) => {
                self.width = width;
                Action::None
            }
            Message::DragStarted(id) => {
                self.drag = Some(DragState::new(id));
                Action::None
            }
            Message::DragEntered(index) => {
                let Some(drag) = self.drag else {
                    return Action::None;
                };

                match editor.moved(drag.id, index) {
                    Some(order) if !same_order(editor.entries(), &order) => {
                        debug!("Moving {} to position {index}", drag.id);
                        Action::Reorder(order)
                    }
                    Some(_) => Action::None,
                    // The grabbed entry no longer exists
                    None => {
                        self.drag = None;
                        Action::None
                    }
                }
            }
            Message::DragEnded => {
                self.drag = None;
                Action::None
            }
            Message::DeletePressed(id) => {
                if self.drag.is_some_and(|drag| drag.id == id) {
                    self.drag = None;
                }
                Action::Delete(id)
            }
            Message::EntryAdded(id) => {
                self.now = Instant::now();
                self.fading.insert(id, self.now);
                Action::None
            }
            Message::Tick(now) => {
                self.now = now;
                self.fading
                    .retain(|_, started| now.duration_since(*started) < FADE_DURATION);
                Action::None
            }
        }
    }

    /// Whether any card is still fading in and frames need to be requested
    pub fn is_animating(&self) -> bool {
        !self.fading.is_empty()
    }

    pub fn view<'a>(&'a self, editor: &'a ListEditor) -> Element<'a, Message> {
        let list = editor.view();

        if !list.is_draggable() {
            return container(text(EMPTY_MESSAGE).style(text::secondary))
                .center_x(Fill)
                .into();
        }

        let layout = self.layout();
        let cards = list
            .rows()
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, entry)| self.card(index, entry, layout));

        let mut content = Column::new().spacing(8);
        if let Some(hint) = list.reorder_hint() {
            content = content.push(container(text(hint).style(text::secondary)).center_x(Fill));
        }

        content
            .push(scrollable(Column::with_children(cards).spacing(12)))
            .into()
    }

    fn layout(&self) -> Layout {
        Layout::for_width(self.width, self.cfg.read().entry_list.wide_breakpoint)
    }

    // Generate a draggable card that represents an entry
    fn card<'a>(&self, index: usize, entry: Row<'a>, layout: Layout) -> Element<'a, Message> {
        let alpha = self
            .fading
            .get(&entry.id)
            .map_or(1.0, |started| fade_progress(*started, self.now));
        let faded = move |theme: &Theme| text::Style {
            color: Some(theme.palette().text.scale_alpha(alpha)),
        };

        let rank = text(entry.rank.to_string()).size(18).width(32).style(faded);
        let info = column![
            text(entry.name).size(18).style(faded),
            text(entry.comment).size(14).style(faded)
        ]
        .spacing(4)
        .width(Fill);
        let delete = tooltip(
            button(icon("trash"))
                .style(button::text)
                .on_press(Message::DeletePressed(entry.id)),
            text(entry.delete_label),
            tooltip::Position::Left,
        );

        let content: Element<'a, Message> = match layout {
            Layout::Wide => row![rank, icon("grip"), info, delete]
                .spacing(16)
                .align_y(Center)
                .into(),
            Layout::Narrow => column![row![rank, space::horizontal(), delete].align_y(Center), info]
                .spacing(8)
                .into(),
        };

        let grabbed = self.drag.is_some_and(|drag| drag.id == entry.id);
        let card = container(content)
            .padding(16)
            .width(Fill)
            .style(move |theme| {
                if grabbed {
                    container::rounded_box(theme)
                } else {
                    container::bordered_box(theme)
                }
            });

        let interaction = if self.drag.is_some() {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::Grab
        };

        mouse_area(card)
            .on_press(Message::DragStarted(entry.id))
            .on_enter(Message::DragEntered(index))
            .interaction(interaction)
            .into()
    }
}

fn same_order(entries: &[Entry], order: &[EntryId]) -> bool {
    entries.iter().map(Entry::id).eq(order.iter().copied())
}

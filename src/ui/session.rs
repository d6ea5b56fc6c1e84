use log::info;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::contacts::service::ContactService;
use super::{
    controller::{Action, ContactManager},
    debounce::Debouncer,
};

/// Everything a front-end can feed into a session.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Action(Action),
    /// Free-running keystrokes in the search box.
    SearchInput(String),
    Redraw,
    Quit,
}

/// Event loop of one UI session. Events from the front-end and from the
/// search debouncer are serialized through one channel, so the controller
/// only ever runs one handler at a time.
pub struct Session<S> {
    manager : ContactManager<S>,
    search  : Debouncer<String>,

    tx      : UnboundedSender<Event>,
    rx      : UnboundedReceiver<Event>,
}

impl<S> Session<S> where S: ContactService {
    pub fn new(manager: ContactManager<S>, search_debounce: u64 /* ms */) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let settled = tx.clone();
        let search = Debouncer::new(search_debounce, move |value: String| {
            _ = settled.send(Event::Action(Action::Search(value)));
        });

        Self {
            manager,
            search,
            tx,
            rx,
        }
    }

    pub fn sender(&self) -> UnboundedSender<Event> {
        self.tx.clone()
    }

    pub fn manager(&self) -> &ContactManager<S> {
        &self.manager
    }

    /// Handles one event. Returns false once the session should end.
    pub async fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::Action(action) => self.manager.dispatch(action).await,
            Event::SearchInput(value) => {
                self.manager.input_search(&value);
                self.search.trigger(value);
            },
            Event::Redraw => {},
            Event::Quit => return false,
        }
        true
    }

    /// Waits for the next event and handles it.
    pub async fn step(&mut self) -> bool {
        match self.rx.recv().await {
            Some(event) => self.handle(event).await,
            None => false,
        }
    }

    /// Starts the controller and processes events until `Event::Quit`,
    /// calling `render` after startup and after every handled event.
    pub async fn run<F>(&mut self, mut render: F)
    where F: FnMut(&ContactManager<S>) {
        self.manager.start().await;
        render(&self.manager);

        while let Some(event) = self.rx.recv().await {
            let input = matches!(event, Event::SearchInput(_));
            if !self.handle(event).await {
                break;
            }
            // keystrokes only render once the search settles
            if !input {
                render(&self.manager);
            }
        }
        info!("Session closed with {} contacts cached", self.manager.store().len());
    }
}

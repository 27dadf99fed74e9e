use log::debug;
use std::sync::mpsc::{Receiver, Sender, channel};

/// Screens the application can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Settings,
}

/// Navigation commands the UI sends to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    NavigateTo(Screen),
    Back,
}

/// Pure transition table: `Main` is the root, `Back` (and navigating "to"
/// the root) always lands there.
pub fn transition(current: Screen, command: NavCommand) -> Screen {
    match command {
        NavCommand::NavigateTo(screen) => screen,
        NavCommand::Back => match current {
            Screen::Settings => Screen::Main,
            Screen::Main => Screen::Main,
        },
    }
}

/// Single writer of the current screen.
///
/// UI code sends [`NavCommand`]s through handles cloned from [`handle`];
/// the controller drains them in [`process_pending`] and publishes each
/// change to read-only subscribers. Nothing else mutates the screen.
///
/// [`handle`]: ScreenController::handle
/// [`process_pending`]: ScreenController::process_pending
pub struct ScreenController {
    current: Screen,
    commands: Receiver<NavCommand>,
    handle: Sender<NavCommand>,
    observers: Vec<Sender<Screen>>,
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenController {
    pub fn new() -> Self {
        let (handle, commands) = channel();
        Self {
            current: Screen::Main,
            commands,
            handle,
            observers: Vec::new(),
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// A cloneable sender for UI event handlers.
    pub fn handle(&self) -> Sender<NavCommand> {
        self.handle.clone()
    }

    /// Read-only stream of screen changes.
    pub fn subscribe(&mut self) -> Receiver<Screen> {
        let (tx, rx) = channel();
        self.observers.push(tx);
        rx
    }

    /// Drains queued commands, applying each in order. Returns the screen
    /// after processing. Observers are only notified on actual changes.
    pub fn process_pending(&mut self) -> Screen {
        while let Ok(command) = self.commands.try_recv() {
            let next = transition(self.current, command);
            if next != self.current {
                debug!("screen {:?} -> {:?}", self.current, next);
                self.current = next;
                self.observers.retain(|observer| observer.send(next).is_ok());
            }
        }
        self.current
    }
}

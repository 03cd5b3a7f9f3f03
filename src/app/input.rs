//! Input actor: dedicated thread polling terminal events.
//!
//! Runs crossterm's event polling off the main loop and forwards simplified
//! events over a crossbeam channel, so the main loop can select over input
//! and editor change notifications uniformly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEventKind};

use super::messages::{InputEvent, KeyCode, KeyModifiers};

/// Handle to the input polling thread.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("snapdiff-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<InputEvent>, shutdown: &AtomicBool, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.send(InputEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if let Some(input_event) = Self::convert_event(ev) {
                            if sender.send(input_event).is_err() {
                                // Receiver dropped, exit
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = sender.send(InputEvent::Error(e.to_string()));
                    }
                },
                Ok(false) => {
                    // No event, loop back and check shutdown
                }
                Err(e) => {
                    let _ = sender.send(InputEvent::Error(e.to_string()));
                }
            }
        }
    }

    /// Convert a crossterm event to our `InputEvent`.
    fn convert_event(ev: Event) -> Option<InputEvent> {
        match ev {
            Event::Key(key_event) => {
                // Only key presses, not releases or repeats
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                let code = Self::convert_key_code(key_event.code)?;
                let modifiers = Self::convert_modifiers(key_event.modifiers);
                Some(InputEvent::Key { code, modifiers })
            }

            Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),

            Event::Paste(text) => Some(InputEvent::Paste(text)),

            _ => None,
        }
    }

    /// Convert crossterm `KeyCode` to ours.
    fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
        Some(match code {
            event::KeyCode::Char(c) => KeyCode::Char(c),
            event::KeyCode::F(n) => KeyCode::F(n),
            event::KeyCode::Backspace => KeyCode::Backspace,
            event::KeyCode::Enter => KeyCode::Enter,
            event::KeyCode::Left => KeyCode::Left,
            event::KeyCode::Right => KeyCode::Right,
            event::KeyCode::Up => KeyCode::Up,
            event::KeyCode::Down => KeyCode::Down,
            event::KeyCode::Home => KeyCode::Home,
            event::KeyCode::End => KeyCode::End,
            event::KeyCode::Tab => KeyCode::Tab,
            event::KeyCode::BackTab => KeyCode::BackTab,
            event::KeyCode::Delete => KeyCode::Delete,
            event::KeyCode::Esc => KeyCode::Esc,
            _ => return None, // Ignore other key codes
        })
    }

    /// Convert crossterm `KeyModifiers` to ours.
    fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
        KeyModifiers {
            shift: mods.contains(event::KeyModifiers::SHIFT),
            control: mods.contains(event::KeyModifiers::CONTROL),
            alt: mods.contains(event::KeyModifiers::ALT),
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

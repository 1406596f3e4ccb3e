//! Carousel message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle frames and hero/showreel input
    pub fn handle_stage(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Frame(now) => {
                self.core.now = *now;
                for carousel in self.stage.carousels_mut() {
                    carousel.tick(*now);
                    carousel.surface_mut().tick(*now);
                }
                self.ui.modal.tick(*now);
                Some(Task::none())
            }

            Message::HeroPrevious => {
                if let Some(hero) = &mut self.stage.hero {
                    hero.go_previous(Instant::now());
                }
                Some(Task::none())
            }

            Message::HeroNext => {
                if let Some(hero) = &mut self.stage.hero {
                    hero.go_next(Instant::now());
                }
                Some(Task::none())
            }

            Message::HeroSelect(index) => {
                if let Some(hero) = &mut self.stage.hero {
                    hero.go_to(*index as isize, false, Instant::now());
                }
                Some(Task::none())
            }

            Message::HeroPointerEntered => {
                if let Some(hero) = &mut self.stage.hero {
                    hero.pause(Instant::now());
                }
                Some(Task::none())
            }

            Message::HeroPointerExited => {
                self.ui.hero_pointer = None;
                if let Some(hero) = &mut self.stage.hero {
                    hero.resume(Instant::now());
                }
                Some(Task::none())
            }

            Message::HeroPointerMoved(position) => {
                self.ui.hero_pointer = Some(*position);
                Some(Task::none())
            }

            Message::HeroPressed => {
                if let (Some(hero), Some(pointer)) = (&mut self.stage.hero, self.ui.hero_pointer) {
                    hero.pointer_down(pointer.x);
                }
                Some(Task::none())
            }

            Message::HeroReleased => {
                if let (Some(hero), Some(pointer)) = (&mut self.stage.hero, self.ui.hero_pointer)
                    && let Some(swipe) = hero.pointer_up(pointer.x, Instant::now())
                {
                    tracing::debug!("Hero swipe {:?}", swipe);
                }
                Some(Task::none())
            }

            Message::ShowreelSelect(index) => {
                if let Some(reel) = &mut self.stage.showreel {
                    reel.go_to(*index as isize, false, Instant::now());
                }
                Some(Task::none())
            }

            Message::ShowreelPointerEntered => {
                if let Some(reel) = &mut self.stage.showreel {
                    reel.pause(Instant::now());
                }
                Some(Task::none())
            }

            Message::ShowreelPointerExited => {
                if let Some(reel) = &mut self.stage.showreel {
                    reel.resume(Instant::now());
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

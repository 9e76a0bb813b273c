/// Banana Clicker — click the banana, buy animals, earn bananas per second.

pub mod actions;
pub mod catalog;
pub mod error;
pub mod logic;
pub mod render;
pub mod state;
pub mod view;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::console;
use crate::input::{ClickState, InputEvent};

use catalog::Catalog;
use error::PurchaseError;
use state::EconomyState;
use view::{ShopView, CLICK_FLASH_FRAMES, PURCHASE_FLASH_FRAMES};

/// What the player asked for, independent of how they asked.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Gain,
    Purchase(u32),
    ScrollShop(i16),
}

pub struct BananaGame {
    pub catalog: Catalog,
    pub economy: EconomyState,
    pub view: ShopView,
}

impl BananaGame {
    pub fn new(catalog: Catalog) -> Self {
        let economy = EconomyState::new(&catalog);
        let mut view = ShopView::new();
        for def in catalog.rows() {
            if render::sprite_art(&def.sprite).is_none() {
                console::warn(&format!(
                    "no art for sprite '{}' (upgrade {}), showing it without a picture",
                    def.sprite, def.id
                ));
            }
        }
        view.add_log("Click the banana to get started!", true);
        Self {
            catalog,
            economy,
            view,
        }
    }

    /// Map an input event to a command, if it means anything here.
    pub fn command_for(&self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::Key(' ') | InputEvent::Key('b') => Some(Command::Gain),
            InputEvent::Key('j') => Some(Command::ScrollShop(1)),
            InputEvent::Key('k') => Some(Command::ScrollShop(-1)),
            InputEvent::Key(c) => actions::shop_index_for_key(*c)
                .and_then(|idx| self.catalog.id_at(idx))
                .map(Command::Purchase),
            InputEvent::Scroll(delta) => Some(Command::ScrollShop(*delta)),
            InputEvent::Click(actions::CLICK_BANANA) => Some(Command::Gain),
            InputEvent::Click(actions::SCROLL_UP) => Some(Command::ScrollShop(-1)),
            InputEvent::Click(actions::SCROLL_DOWN) => Some(Command::ScrollShop(1)),
            InputEvent::Click(id) => actions::upgrade_for_action(*id).map(Command::Purchase),
        }
    }

    /// Handle an input event. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match self.command_for(event) {
            Some(cmd) => {
                self.execute(cmd);
                true
            }
            None => false,
        }
    }

    pub fn execute(&mut self, cmd: Command) {
        match cmd {
            Command::Gain => {
                logic::record_manual_gain(&mut self.economy);
                self.view.click_flash = CLICK_FLASH_FRAMES;
            }
            Command::Purchase(id) => self.purchase(id),
            Command::ScrollShop(delta) => self.view.scroll_by(delta),
        }
    }

    fn purchase(&mut self, id: u32) {
        match logic::purchase(&mut self.economy, id) {
            Ok(receipt) => {
                let name = self
                    .catalog
                    .get(id)
                    .map(|d| d.name.as_str())
                    .unwrap_or("?");
                self.view.add_log(
                    &format!(
                        "Bought {} (owned {}) +{}/s",
                        name, receipt.owned, receipt.current_rate
                    ),
                    receipt.owned == 1,
                );
                self.view.purchase_flash = PURCHASE_FLASH_FRAMES;
            }
            // A rejected purchase is not an event; nothing on screen changes.
            Err(PurchaseError::InsufficientFunds { .. }) => {}
            Err(err @ PurchaseError::UnknownUpgrade(_)) => {
                console::warn(&format!("purchase ignored: {}", err));
            }
        }
    }

    /// One timer period elapsed.
    pub fn tick(&mut self) {
        logic::apply_tick(&mut self.economy);
    }

    /// One draw frame elapsed.
    pub fn advance_frame(&mut self) {
        self.view.advance_frame();
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }
}

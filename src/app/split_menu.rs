//! Split-stack handler used for every intercepted screen of the demo host

use std::marker::PhantomData;

use tracing::info;

use crate::overlay::{
    Button, HandlerError, HandlerResult, InputOutcome, KeyCode, MenuHandler, MouseButton, Screen,
    ScreenType,
};

/// Longest amount the split menu accepts, in digits
const MAX_DIGITS: usize = 3;

/// Ticks between caret blinks
const CARET_BLINK_TICKS: u32 = 30;

/// Overlay output collected for one frame
#[derive(Debug, Clone, Default)]
pub struct OverlayFrame {
    lines: Vec<String>,
}

impl OverlayFrame {
    /// Creates an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line of overlay text
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Lines drawn this frame
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns true if nothing was drawn
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines joined for single-line display
    pub fn text(&self) -> String {
        self.lines.join(" | ")
    }
}

/// Amount prompt shown over a screen while splitting a stack
#[derive(Debug, Clone, Default)]
struct SplitMenu {
    amount: String,
    caret_visible: bool,
}

/// Split-stack handler for screens of type `T`
pub struct StackSplitHandler<T> {
    screen_name: Option<String>,
    split_menu: Option<SplitMenu>,
    confirmed: Vec<u32>,
    ticks: u32,
    _screen: PhantomData<fn() -> T>,
}

impl<T: Screen> StackSplitHandler<T> {
    /// Creates a closed handler
    pub fn new() -> Self {
        Self {
            screen_name: None,
            split_menu: None,
            confirmed: Vec::new(),
            ticks: 0,
            _screen: PhantomData,
        }
    }

    /// Factory suitable for [`crate::overlay::HandlerRegistry::register_fn`]
    pub fn factory() -> Box<dyn MenuHandler<OverlayFrame>> {
        Box::new(Self::new())
    }

    /// Returns true while the amount prompt is showing
    pub fn is_split_menu_open(&self) -> bool {
        self.split_menu.is_some()
    }

    /// Amount typed so far, if the prompt is showing
    pub fn split_amount(&self) -> Option<&str> {
        self.split_menu.as_ref().map(|menu| menu.amount.as_str())
    }

    /// Amounts confirmed since the handler was created
    pub fn confirmed(&self) -> &[u32] {
        &self.confirmed
    }

    /// Display name of the screen the handler is attached to
    pub fn screen_name(&self) -> Option<&str> {
        self.screen_name.as_deref()
    }

    fn confirm(&mut self) {
        let Some(menu) = self.split_menu.take() else {
            return;
        };
        // Empty or zero amounts cancel the split
        match menu.amount.parse::<u32>() {
            Ok(amount) if amount > 0 => {
                info!(amount, screen = self.screen_name.as_deref().unwrap_or("?"), "Split stack");
                self.confirmed.push(amount);
            }
            _ => {}
        }
    }
}

impl<T: Screen> Default for StackSplitHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Screen> MenuHandler<OverlayFrame> for StackSplitHandler<T> {
    fn name(&self) -> &'static str {
        ScreenType::of::<T>().short_name()
    }

    fn open(&mut self, screen: &dyn Screen) -> HandlerResult {
        if !self.is_correct_menu_type(screen) {
            return Err(HandlerError::new(format!(
                "expected a {} screen, got {}",
                ScreenType::of::<T>(),
                screen.screen_type()
            )));
        }
        self.screen_name = Some(screen.display_name());
        self.split_menu = None;
        self.ticks = 0;
        Ok(())
    }

    fn close(&mut self) -> HandlerResult {
        self.split_menu = None;
        self.screen_name = None;
        Ok(())
    }

    fn update(&mut self) -> HandlerResult {
        self.ticks = self.ticks.wrapping_add(1);
        if let Some(menu) = &mut self.split_menu
            && self.ticks % CARET_BLINK_TICKS == 0
        {
            menu.caret_visible = !menu.caret_visible;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut OverlayFrame) -> HandlerResult {
        if let Some(menu) = &self.split_menu {
            let caret = if menu.caret_visible { "_" } else { " " };
            frame.push(format!("Split: {}{}", menu.amount, caret));
        }
        Ok(())
    }

    fn handle_input(&mut self, button: Button) -> HandlerResult<InputOutcome> {
        let Some(menu) = &mut self.split_menu else {
            // Right click on a stack opens the prompt instead of the host's
            // own half-stack pickup
            if button == Button::Mouse(MouseButton::Right) {
                self.split_menu = Some(SplitMenu {
                    caret_visible: true,
                    ..SplitMenu::default()
                });
                return Ok(InputOutcome::Consumed);
            }
            return Ok(InputOutcome::NotHandled);
        };

        if let Some(digit) = button.digit() {
            if menu.amount.len() < MAX_DIGITS {
                menu.amount.push(char::from_digit(digit, 10).unwrap_or('0'));
            }
            return Ok(InputOutcome::Handled);
        }

        let outcome = match button {
            Button::Key(KeyCode::Backspace) => {
                menu.amount.pop();
                InputOutcome::Handled
            }
            Button::Key(KeyCode::Enter) => {
                self.confirm();
                InputOutcome::Consumed
            }
            Button::Key(KeyCode::Escape) => InputOutcome::Handled,
            _ => InputOutcome::NotHandled,
        };
        Ok(outcome)
    }

    fn close_split_menu(&mut self) {
        self.split_menu = None;
    }

    fn is_correct_menu_type(&self, screen: &dyn Screen) -> bool {
        screen.as_any().is::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::{InventoryScreen, ShopScreen};

    fn shop() -> ShopScreen {
        ShopScreen {
            shopkeeper: "Pierre".to_string(),
        }
    }

    fn opened() -> StackSplitHandler<ShopScreen> {
        let mut handler = StackSplitHandler::<ShopScreen>::new();
        handler.open(&shop()).expect("shop handler opens on a shop");
        handler
    }

    #[test]
    fn test_open_rejects_other_screen_types() {
        let mut handler = StackSplitHandler::<ShopScreen>::new();
        assert!(handler.open(&InventoryScreen).is_err());
        assert!(handler.screen_name().is_none());
        assert!(handler.open(&shop()).is_ok());
        assert_eq!(handler.screen_name(), Some("Shop (Pierre)"));
    }

    #[test]
    fn test_right_click_opens_split_menu() {
        let mut handler = opened();
        let outcome = handler.handle_input(Button::Mouse(MouseButton::Right)).unwrap();
        assert_eq!(outcome, InputOutcome::Consumed);
        assert!(handler.is_split_menu_open());
    }

    #[test]
    fn test_input_without_split_menu_is_not_handled() {
        let mut handler = opened();
        for button in [
            Button::Key(KeyCode::Num1),
            Button::Key(KeyCode::Escape),
            Button::Mouse(MouseButton::Left),
        ] {
            assert_eq!(handler.handle_input(button).unwrap(), InputOutcome::NotHandled);
        }
    }

    #[test]
    fn test_digits_and_backspace_edit_amount() {
        let mut handler = opened();
        handler.handle_input(Button::Mouse(MouseButton::Right)).unwrap();

        for key in [KeyCode::Num1, KeyCode::Num2, KeyCode::Num5, KeyCode::Num9] {
            assert_eq!(handler.handle_input(Button::Key(key)).unwrap(), InputOutcome::Handled);
        }
        // capped at three digits
        assert_eq!(handler.split_amount(), Some("125"));

        handler.handle_input(Button::Key(KeyCode::Backspace)).unwrap();
        assert_eq!(handler.split_amount(), Some("12"));
    }

    #[test]
    fn test_enter_confirms_and_closes() {
        let mut handler = opened();
        handler.handle_input(Button::Mouse(MouseButton::Right)).unwrap();
        handler.handle_input(Button::Key(KeyCode::Num4)).unwrap();
        handler.handle_input(Button::Key(KeyCode::Num2)).unwrap();

        let outcome = handler.handle_input(Button::Key(KeyCode::Enter)).unwrap();
        assert_eq!(outcome, InputOutcome::Consumed);
        assert!(!handler.is_split_menu_open());
        assert_eq!(handler.confirmed(), &[42]);
    }

    #[test]
    fn test_enter_with_empty_amount_confirms_nothing() {
        let mut handler = opened();
        handler.handle_input(Button::Mouse(MouseButton::Right)).unwrap();
        handler.handle_input(Button::Key(KeyCode::Enter)).unwrap();
        assert!(handler.confirmed().is_empty());
    }

    #[test]
    fn test_escape_is_handled_while_split_menu_open() {
        let mut handler = opened();
        handler.handle_input(Button::Mouse(MouseButton::Right)).unwrap();
        let outcome = handler.handle_input(Button::Key(KeyCode::Escape)).unwrap();
        assert_eq!(outcome, InputOutcome::Handled);
        // closing is left to the caller
        assert!(handler.is_split_menu_open());
    }

    #[test]
    fn test_draw_and_caret_blink() {
        let mut handler = opened();
        let mut frame = OverlayFrame::new();
        handler.draw(&mut frame).unwrap();
        assert!(frame.is_empty());

        handler.handle_input(Button::Mouse(MouseButton::Right)).unwrap();
        handler.handle_input(Button::Key(KeyCode::Num7)).unwrap();
        handler.draw(&mut frame).unwrap();
        assert_eq!(frame.lines(), &["Split: 7_".to_string()]);

        for _ in 0..CARET_BLINK_TICKS {
            handler.update().unwrap();
        }
        let mut frame = OverlayFrame::new();
        handler.draw(&mut frame).unwrap();
        assert_eq!(frame.text(), "Split: 7 ");
    }

    #[test]
    fn test_name_is_screen_type() {
        let handler = StackSplitHandler::<InventoryScreen>::new();
        assert_eq!(handler.name(), "InventoryScreen");
    }
}

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CurrencyList, ResultBanner, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Draws the whole screen:
///
/// ```text
/// ┌ title ───────────────┐  1 line
/// │ ₹ amount input       │  3 lines
/// │      $ 1.20          │  result, 3 lines
/// │ currency list        │  rest
/// └ snackbar ────────────┘  1 line
/// ```
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Length(3), Min(0), Length(1)]);
    let [title_area, input_area, result_area, list_area, snackbar_area] =
        layout.areas(frame.area());

    let target_name = app.target_currency().map(|c| c.name.clone());
    TitleBar::new(target_name).render(frame, title_area);

    tui.amount_input.render(frame, input_area);

    // Centre the one-line result vertically within its band
    let [_, result_line, _] = Layout::vertical([Length(1), Length(1), Length(1)]).areas(result_area);
    ResultBanner::new(app.result_text.as_deref()).render(frame, result_line);

    CurrencyList::new(&mut tui.currency_list, &app.rates, app.target).render(frame, list_area);

    tui.snackbar.render(frame, snackbar_area);
}

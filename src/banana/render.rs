//! Banana Clicker rendering: counter header, banana, scrollable shop, log.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions::{self, CLICK_BANANA, SCROLL_DOWN, SCROLL_UP, SHOP_KEYS};
use super::logic::{balance_label, cost_label, owned_label, rate_label};
use super::BananaGame;

const BANANA_ART: &[&str] = &[
    "        _  ",
    "       //\\ ",
    "       V  \\",
    "        \\  \\_",
    "         \\,'.`-.",
    "          |\\ `. `.",
    "          ( \\  `. `-.      _,.-:\\",
    "           \\ \\   `.  `-._ __..--' ,-';/",
    "            \\ `.   `-.   `-..___..---'  _.--' ,'/",
    "             `. `.    `-._        __..--'    ,' /",
    "               `. `-_     ``--..''       _.-' ,'",
    "                 `-_ `-.___        __,--'   ,'",
    "                    `-.__  `----\"\"\"    __.-'",
    "                         `--..____..--'",
];

/// Compact banana for narrow screens.
const BANANA_ART_SMALL: &[&str] = &[
    "   _   ",
    "  //\\  ",
    "  \\ `. `-._   _,",
    "   `._ `-..--' /",
    "      `-.___.-'",
];

/// Shop art per catalog sprite name.
const SPRITES: &[(&str, &[&str])] = &[
    ("pig", &[" ^..^ ", "( oo )~", " uu uu"]),
    ("dog", &["  __  ", "o-''|\\_____/)", " \\_/|_)     )"]),
    ("chicken", &["  ,~.", " ('v')>", " /( )\\"]),
    ("monkey", &[" .-\"-. ", "( o o )", " (_^_) "]),
    ("goat", &[" )_(  ", " (oo)__", "  \\/  \\)"]),
    ("horse", &["   ,--,", " _/ o  \\", "(__/\\___)"]),
    ("snake", &["   __  ", " _(o )~", "(_____)~~"]),
    ("dragon", &["  /\\_/\\ ", "<( @@ )>~", "  \\vv/  "]),
    ("rabbit", &[" (\\_/)", " (o.o)", " (\")(\")"]),
    ("tiger", &[" /\\_/\\ ", "( =^= )", " \\_-_/ "]),
    ("cow", &[" ^__^  ", " (oo)\\___", " (__)\\   )"]),
    ("mouse", &["  ()()  ", " ( '.')", "o(\")(\")"]),
];

pub fn sprite_art(name: &str) -> Option<&'static [&'static str]> {
    SPRITES.iter().find(|(n, _)| *n == name).map(|(_, art)| *art)
}

pub fn render(game: &BananaGame, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // counter + rate
            Constraint::Min(8),    // content
            Constraint::Length(3), // scroll bar
        ])
        .split(area);

    render_counter(game, f, chunks[0]);

    if is_narrow_layout(area.width) {
        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(BANANA_ART_SMALL.len() as u16 + 3),
                Constraint::Min(5),
            ])
            .split(chunks[1]);
        render_banana(game, f, body[0], BANANA_ART_SMALL, click_state);
        render_shop(game, f, body[1], click_state);
    } else {
        // Shop on the left, banana on the right; log only when there is room
        let constraints = if area.width >= 100 {
            vec![
                Constraint::Percentage(40),
                Constraint::Percentage(35),
                Constraint::Percentage(25),
            ]
        } else {
            vec![Constraint::Percentage(45), Constraint::Percentage(55)]
        };
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(chunks[1]);
        render_shop(game, f, body[0], click_state);
        let art = if body[1].width >= 54 { BANANA_ART } else { BANANA_ART_SMALL };
        render_banana(game, f, body[1], art, click_state);
        if let Some(&log_area) = body.get(2) {
            render_log(game, f, log_area);
        }
    }

    render_scroll_bar(f, chunks[2], click_state);
}

fn render_counter(game: &BananaGame, f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            balance_label(game.economy.balance()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            rate_label(game.economy.total_rate()),
            Style::default().fg(Color::White),
        )),
    ];
    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Banana.io "),
        )
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn render_banana(
    game: &BananaGame,
    f: &mut Frame,
    area: Rect,
    art: &[&str],
    click_state: &Rc<RefCell<ClickState>>,
) {
    let style = if game.view.click_flash > 0 {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Yellow)
    };

    // Vertically center the art inside the border
    let inner_h = area.height.saturating_sub(2) as usize;
    let pad = inner_h.saturating_sub(art.len() + 1) / 2;
    let mut lines: Vec<Line> = vec![Line::from(""); pad];
    lines.extend(art.iter().map(|l| Line::from(Span::styled(*l, style))));
    lines.push(Line::from(Span::styled(
        "[Space] click the banana!",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Center);
    f.render_widget(widget, area);

    // The whole panel is the banana
    click_state
        .borrow_mut()
        .add_click_target(area, CLICK_BANANA);
}

/// Build the shop list: one clickable entry per catalog row.
pub fn shop_list(game: &BananaGame) -> ClickableList<'static> {
    let mut cl = ClickableList::new();

    for (idx, (def, up)) in game
        .catalog
        .rows()
        .iter()
        .zip(game.economy.upgrades())
        .enumerate()
    {
        let action = actions::buy_upgrade(def.id);
        let affordable = game.economy.can_afford(def.id);
        let (key_style, text_style) = if affordable {
            (
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::White),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            )
        };

        if let Some(art) = sprite_art(&def.sprite) {
            let art_style = if affordable {
                Style::default().fg(Color::LightYellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            for l in art {
                cl.push_clickable(Line::from(Span::styled(format!("  {}", l), art_style)), action);
            }
        }

        let key = SHOP_KEYS.get(idx).copied().unwrap_or(' ');
        cl.push_clickable(
            Line::from(vec![
                Span::styled(format!(" [{}] ", key), key_style),
                Span::styled(def.name.clone(), text_style.add_modifier(Modifier::BOLD)),
            ]),
            action,
        );
        cl.push_clickable(
            Line::from(Span::styled(
                format!("     {}", cost_label(up.current_cost, up.current_rate)),
                text_style.add_modifier(Modifier::ITALIC),
            )),
            action,
        );
        cl.push_clickable(
            Line::from(Span::styled(
                format!("     {}", owned_label(up.owned)),
                text_style,
            )),
            action,
        );
        cl.push(Line::from(""));
    }

    cl
}

/// Largest scroll offset that still shows a full `inner` viewport of `cl`.
fn shop_max_scroll(cl: &ClickableList, inner: Rect) -> u16 {
    cl.visual_height(inner.width)
        .saturating_sub(inner.height as usize)
        .min(u16::MAX as usize) as u16
}

fn render_shop(
    game: &BananaGame,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let border_color = if game.view.purchase_flash > 0 {
        Color::Green
    } else {
        Color::Yellow
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Upgrades Shop ");
    let inner = block.inner(area);

    let cl = shop_list(game);
    game.view.shop_max_scroll.set(shop_max_scroll(&cl, inner));
    let scroll = game.view.visible_scroll();

    cl.register_targets(area, &mut click_state.borrow_mut(), 1, 1, scroll, inner.width);

    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(widget, area);
}

fn render_log(game: &BananaGame, f: &mut Frame, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = game.view.log.len().saturating_sub(visible);

    let lines: Vec<Line> = game.view.log[start..]
        .iter()
        .map(|entry| {
            let style = if entry.is_important {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(entry.text.as_str(), style))
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(format!(" Log · {} animals ", game.economy.total_owned())),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

/// Two halves, each a click target: scroll the shop up or down.
fn render_scroll_bar(f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let style = Style::default().fg(Color::DarkGray);
    let mut cs = click_state.borrow_mut();
    for (rect, label, action) in [
        (halves[0], "[k] ▲ shop up", SCROLL_UP),
        (halves[1], "[j] ▼ shop down", SCROLL_DOWN),
    ] {
        let widget = Paragraph::new(Line::from(Span::styled(label, style)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .alignment(Alignment::Center);
        f.render_widget(widget, rect);
        cs.add_click_target(rect, action);
    }
}

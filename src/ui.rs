//! User interface rendering functions for all application screens.

use color_eyre::eyre::{OptionExt as _, Result};
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line as Segment, Points, Rectangle},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};

use crate::{
    maze::{Cell, Direction, Position, Walls},
    session::Session,
    types::{MenuItem, Screen},
    App,
};

/// Half the side of a room, in canvas units.
const ROOM_HALF: f64 = 8.;

/// Distance between the outer and inner face of a wall.
const WALL_THICKNESS: f64 = 0.8;

/// Half the width of a doorway.
const DOOR_HALF: f64 = 2.;

/// Smallest half-extent of the visible canvas, so the room always fits.
const VIEW_EXTENT: i32 = 10;

/// Number of floor speckles drawn per room.
const FLOOR_SPECKLES: usize = 20;

/// Width of the menus, borders included.
const MENU_WIDTH: u16 = 34;

/// An RGB triple before torchlight is applied.
type Rgb = (u8, u8, u8);

/// Stone wall face.
const WALL_COLOR: Rgb = (139, 115, 85);
/// Lit edge of the walls.
const WALL_EDGE_COLOR: Rgb = (160, 137, 95);
/// Doorway posts.
const DOOR_COLOR: Rgb = (79, 79, 79);
/// Floor texture.
const FLOOR_COLOR: Rgb = (112, 112, 112);
/// Exit plate.
const EXIT_COLOR: Rgb = (255, 215, 0);
/// Exit plate frame.
const EXIT_FRAME_COLOR: Rgb = (255, 140, 0);
/// Player tunic.
const BODY_COLOR: Rgb = (255, 107, 71);
/// Player face.
const HEAD_COLOR: Rgb = (255, 219, 172);
/// Torch handle.
const HANDLE_COLOR: Rgb = (139, 69, 19);
/// Torch glow rings, outermost first, with their radius.
const GLOW_RINGS: [(f64, Rgb); 3] = [
    (6.5, (200, 100, 50)),
    (4.5, (255, 140, 70)),
    (2.5, (255, 180, 100)),
];

/// Accent colour of the menus and status bar.
const ACCENT: Color = Color::Rgb(255, 180, 100);

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type. The pause
/// menu is drawn on top of the room it interrupts.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => {
            clear(frame);
            menu(frame, item, &[])?;
        }
        Screen::InGame => in_game(app, frame)?,
        Screen::Paused(item) => {
            in_game(app, frame)?;
            menu(frame, item, &[])?;
        }
        Screen::Ended(item) => {
            clear(frame);
            let summary = app.session.as_ref().map_or_else(String::new, |session| {
                format!(
                    "{} maze cleared in {} moves",
                    session.difficulty.label(),
                    session.moves
                )
            });
            menu(frame, item, &[summary])?;
        }
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders a centred vertical menu with the `selected` item highlighted.
///
/// `notes` are drawn above the items, inside the same border. The area behind the menu is cleared
/// first so it can be drawn over the room.
pub(crate) fn menu<M: MenuItem>(frame: &mut Frame, selected: M, notes: &[String]) -> Result<()> {
    let rows = notes.len() + M::ITEMS.len();
    let height = u16::try_from(rows + 2)?;

    let space = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(frame.area())
    .get(1)
    .copied()
    .ok_or_eyre("failed to get menu row from layout")?;
    let layout = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(MENU_WIDTH),
        Constraint::Fill(1),
    ])
    .split(space)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get menu column from layout")?;

    let block = Block::bordered()
        .title(M::TITLE)
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(ACCENT)
        .border_type(BorderType::Rounded);
    let inner_space = block.inner(layout);

    frame.render_widget(Clear, layout);
    frame.render_widget(block, layout);

    let inner_layout = Layout::vertical(vec![Constraint::Length(1); rows]).split(inner_space);

    let content_style = Style::default().fg(ACCENT);
    let active_content_style = Style::default().fg(Color::Black).bg(ACCENT);
    let note_style = Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC);

    let lines = notes
        .iter()
        .map(|note| Line::styled(note.clone(), note_style).centered())
        .chain(M::ITEMS.iter().map(|&item| {
            let style = if item == selected {
                active_content_style
            } else {
                content_style
            };
            Line::styled(item.label(), style).centered()
        }));
    for (line, area) in lines.zip(inner_layout.iter()) {
        frame.render_widget(line, *area);
    }

    Ok(())
}

/// Renders the in-game screen: the current room, the minimap and the status bar.
///
/// # Errors
///
/// This function may return errors if no game is running or if layout conversions fail.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let session = app
        .session
        .as_ref()
        .ok_or_eyre("no game in progress to draw")?;
    let size = session.navigator.grid().size();

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Room and minimap
        Constraint::Length(3), // Status bar
    ])
    .split(frame.area());
    let content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get content area from layout")?;
    let status_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get status area from layout")?;

    let minimap_width = u16::try_from(size * 2 + 2)?;
    let content_layout = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(minimap_width),
    ])
    .split(content_area);
    let room_area = *content_layout
        .first()
        .ok_or_eyre("failed to get room area from layout")?;
    let minimap_area = *content_layout
        .last()
        .ok_or_eyre("failed to get minimap area from layout")?;

    room(session, frame, room_area)?;
    frame.render_widget(minimap(session), minimap_area);
    frame.render_widget(status_bar(session), status_area);

    Ok(())
}

/// Everything needed to paint the room the player stands in.
struct RoomView {
    /// Walls of the room.
    walls: Walls,
    /// Whether the room holds the exit.
    is_end: bool,
    /// Light level applied to every colour: torch flicker times the fade.
    brightness: f64,
    /// Raw torch intensity, used for the flame itself.
    flame: f64,
    /// Side the player faces; the torch is held on that side.
    facing: Direction,
    /// Side the player just walked in through, while the fade plays.
    entered_from: Option<Direction>,
    /// Floor texture points.
    speckles: Vec<(f64, f64)>,
}

impl RoomView {
    /// Gathers the view of the room under the player.
    fn new(session: &Session) -> Result<Self> {
        let position = session.navigator.position();
        let cell = session
            .navigator
            .current_cell()
            .ok_or_eyre("player stands outside the maze")?;
        let flame = session.torch.intensity();

        Ok(Self {
            walls: cell.walls(),
            is_end: cell.is_end(),
            brightness: flame * (1. - session.transition.darkness()),
            flame,
            facing: session.facing,
            entered_from: session.transition.direction().map(Direction::opposite),
            speckles: floor_speckles(position),
        })
    }

    /// Scales `rgb` by the current light level.
    fn lit(&self, rgb: Rgb) -> Color {
        shade(rgb, self.brightness)
    }

    /// Paints the room onto a canvas context.
    fn paint(&self, ctx: &mut Context<'_>) {
        for (radius, rgb) in GLOW_RINGS {
            ctx.draw(&Circle {
                x: 0.,
                y: 0.,
                radius,
                color: shade(rgb, self.brightness * 0.6),
            });
        }
        ctx.draw(&Points {
            coords: &self.speckles,
            color: self.lit(FLOOR_COLOR),
        });
        ctx.layer();

        for direction in Direction::ALL {
            let open = !self.walls.contains(direction);
            for [x1, y1, x2, y2] in side_segments(direction, open, 0.) {
                ctx.draw(&Segment::new(x1, y1, x2, y2, self.lit(WALL_EDGE_COLOR)));
            }
            for [x1, y1, x2, y2] in side_segments(direction, open, WALL_THICKNESS) {
                ctx.draw(&Segment::new(x1, y1, x2, y2, self.lit(WALL_COLOR)));
            }
            if open {
                let post = if self.entered_from == Some(direction) {
                    shade(EXIT_FRAME_COLOR, self.flame)
                } else {
                    self.lit(DOOR_COLOR)
                };
                for [x1, y1, x2, y2] in door_posts(direction) {
                    ctx.draw(&Segment::new(x1, y1, x2, y2, post));
                }
            }
        }

        if self.is_end {
            ctx.draw(&Rectangle {
                x: -2.5,
                y: -2.5,
                width: 5.,
                height: 5.,
                color: self.lit(EXIT_FRAME_COLOR),
            });
            ctx.draw(&Rectangle {
                x: -2.,
                y: -2.,
                width: 4.,
                height: 4.,
                color: self.lit(EXIT_COLOR),
            });
            ctx.print(
                -1.,
                -1.2,
                Line::styled("EXIT", Style::default().fg(self.lit(EXIT_COLOR))),
            );
        }
        ctx.layer();

        self.paint_player(ctx);
    }

    /// Paints the player and the torch held on the facing side.
    fn paint_player(&self, ctx: &mut Context<'_>) {
        ctx.draw(&Rectangle {
            x: -0.5,
            y: -0.8,
            width: 1.,
            height: 1.3,
            color: self.lit(BODY_COLOR),
        });
        ctx.draw(&Points {
            coords: &[(0., 0.9)],
            color: self.lit(HEAD_COLOR),
        });

        let torch_x = match self.facing {
            Direction::Right => 1.2,
            Direction::Left => -1.2,
            Direction::Up | Direction::Down => 0.,
        };
        ctx.draw(&Segment::new(
            torch_x,
            -0.2,
            torch_x,
            0.5,
            self.lit(HANDLE_COLOR),
        ));
        ctx.draw(&Points {
            coords: &[(torch_x, 0.8)],
            color: shade((255, 200, 0), self.flame),
        });
    }
}

/// Draws the room canvas into `area`.
fn room(session: &Session, frame: &mut Frame, area: Rect) -> Result<()> {
    let Some((x_bounds, y_bounds)) = view_bounds(area) else {
        return Ok(());
    };
    let view = RoomView::new(session)?;

    let canvas = Canvas::default()
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .marker(Marker::Braille)
        .background_color(Color::Black)
        .paint(|ctx| view.paint(ctx));
    frame.render_widget(canvas, area);

    Ok(())
}

/// Computes canvas bounds that keep rooms square inside `area`.
///
/// Terminal cells are roughly twice as tall as they are wide, so the vertical extent is doubled
/// before comparing sides. Returns `None` for an empty area.
fn view_bounds(area: Rect) -> Option<([f64; 2], [f64; 2])> {
    if area.width == 0 || area.height == 0 {
        return None;
    }

    let width = i32::from(area.width);
    let height = i32::from(area.height) * 2;
    let (half_x, half_y) = if width >= height {
        (rounded_div::i32(VIEW_EXTENT * width, height), VIEW_EXTENT)
    } else {
        (VIEW_EXTENT, rounded_div::i32(VIEW_EXTENT * height, width))
    };

    Some((
        [-f64::from(half_x), f64::from(half_x)],
        [-f64::from(half_y), f64::from(half_y)],
    ))
}

/// Segments outlining the `direction` side of the room, `inset` units inside the border.
///
/// An open side leaves a doorway gap in its middle.
fn side_segments(direction: Direction, open: bool, inset: f64) -> Vec<[f64; 4]> {
    let edge = ROOM_HALF - inset;
    let spans = if open {
        vec![(-edge, -DOOR_HALF), (DOOR_HALF, edge)]
    } else {
        vec![(-edge, edge)]
    };

    spans
        .into_iter()
        .map(|(from, to)| match direction {
            Direction::Up => [from, edge, to, edge],
            Direction::Down => [from, -edge, to, -edge],
            Direction::Right => [edge, from, edge, to],
            Direction::Left => [-edge, from, -edge, to],
        })
        .collect()
}

/// The two posts framing the doorway on the `direction` side.
fn door_posts(direction: Direction) -> [[f64; 4]; 2] {
    let (outer, inner) = (ROOM_HALF, ROOM_HALF - WALL_THICKNESS);

    [-DOOR_HALF, DOOR_HALF].map(|along| match direction {
        Direction::Up => [along, outer, along, inner],
        Direction::Down => [along, -outer, along, -inner],
        Direction::Right => [outer, along, inner, along],
        Direction::Left => [-outer, along, -inner, along],
    })
}

/// Floor texture for the room at `position`.
///
/// Speckles are seeded from the room coordinates so every room keeps the same floor between
/// frames and visits.
fn floor_speckles(position: Position) -> Vec<(f64, f64)> {
    let x = u64::try_from(position.x).unwrap_or_default();
    let y = u64::try_from(position.y).unwrap_or_default();
    let mut rng = StdRng::seed_from_u64(x.wrapping_mul(0x9E37_79B9).wrapping_add(y));
    let floor = ROOM_HALF - WALL_THICKNESS;

    (0..FLOOR_SPECKLES)
        .map(|_| {
            (
                rng.random_range(-floor..floor),
                rng.random_range(-floor..floor),
            )
        })
        .collect()
}

/// Scales every channel of `rgb` by `factor`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Channels are clamped to the u8 range before the cast."
)]
fn shade(rgb: Rgb, factor: f64) -> Color {
    let scale = |channel: u8| (f64::from(channel) * factor).round().clamp(0., 255.) as u8;
    Color::Rgb(scale(rgb.0), scale(rgb.1), scale(rgb.2))
}

/// Room-level map of the explored part of the maze.
///
/// Unexplored rooms are dots, explored rooms are hashes, the exit shows once found and the player
/// is an at sign.
fn minimap(session: &Session) -> Paragraph<'static> {
    let grid = session.navigator.grid();
    let here = session.navigator.position();
    let size = grid.size();

    let rows: Vec<Line<'static>> = (0..size)
        .map(|y| {
            Line::from(
                (0..size)
                    .map(|x| {
                        let position = Position::new(x, y);
                        let is_end = grid.cell(position).is_some_and(Cell::is_end);
                        if position == here {
                            Span::styled("@ ", Style::default().fg(Color::Yellow))
                        } else if !session.navigator.has_visited(position) {
                            Span::styled(". ", Style::default().fg(Color::DarkGray))
                        } else if is_end {
                            Span::styled("X ", Style::default().fg(Color::LightYellow))
                        } else {
                            Span::styled("# ", Style::default().fg(ACCENT))
                        }
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    Paragraph::new(rows).block(
        Block::bordered()
            .title("Map")
            .title_alignment(Alignment::Center)
            .style(Style::default().fg(ACCENT))
            .border_type(BorderType::Rounded),
    )
}

/// Status bar with the controls and the current progress.
fn status_bar(session: &Session) -> Paragraph<'static> {
    let grid = session.navigator.grid();
    let position = session.navigator.position();
    let status = format!(
        "{}  room {},{}  facing {}  moves {}  explored {}/{}",
        session.difficulty.label(),
        position.x,
        position.y,
        session.facing.label(),
        session.moves,
        session.navigator.visited().len(),
        grid.size() * grid.size(),
    );

    Paragraph::new(Line::from(status).centered()).block(
        Block::bordered()
            .title("(arrows/wasd) move / (esc) pause / (q) quit")
            .title_alignment(Alignment::Center)
            .style(Style::default().fg(ACCENT))
            .border_type(BorderType::Plain)
            .borders(Borders::TOP),
    )
}

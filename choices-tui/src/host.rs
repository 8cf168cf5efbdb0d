//! Draws a picker into the terminal and maps mouse positions back to it.
//!
//! Layout is fixed rows: a title, the item chips, the input and the
//! dropdown below it. One dropdown entry occupies one row, so choice
//! bounds and scroll offsets are in rows.

use std::io::{self, Write};

use choices::Host;
use choices::model::ChoiceId;
use choices::render::{DropdownEntry, Frame, PassedValue, RetainedView};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{cursor, queue, terminal};
use pickdom::{Bounds, Hit, ScrollMetrics, Viewport};
use unicode_width::UnicodeWidthStr;

const ITEMS_ROW: u16 = 2;
const INPUT_ROW: u16 = 3;
const DROPDOWN_TOP: u16 = 4;
const MAX_DROPDOWN_ROWS: usize = 8;
const REMOVE_MARK: &str = " x";

/// Screen columns of an item chip.
#[derive(Debug, Clone, Copy)]
struct Chip {
    id: u32,
    start: u16,
    end: u16,
    /// Column of the remove mark, when shown
    remove: Option<u16>,
}

pub struct TerminalHost {
    title: String,
    width: u16,
    height: u16,
    remove_buttons: bool,
    view: RetainedView,
    chips: Vec<Chip>,
    scroll_top: i32,
    dirty: bool,
}

impl TerminalHost {
    pub fn new(title: impl Into<String>, remove_buttons: bool) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(title, remove_buttons, width, height))
    }

    fn with_size(title: impl Into<String>, remove_buttons: bool, width: u16, height: u16) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            remove_buttons,
            view: RetainedView::default(),
            chips: Vec::new(),
            scroll_top: 0,
            dirty: true,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.layout_chips();
        self.dirty = true;
    }

    fn dropdown_rows(&self) -> usize {
        let room = self.height.saturating_sub(DROPDOWN_TOP + 1) as usize;
        self.view.dropdown.len().min(MAX_DROPDOWN_ROWS).min(room)
    }

    fn layout_chips(&mut self) {
        self.chips.clear();
        let mark = if self.remove_buttons { REMOVE_MARK.len() as u16 } else { 0 };
        let mut col: u16 = 0;
        for item in &self.view.items {
            if col >= self.width {
                break;
            }
            let label_width = u16::try_from(item.label.width()).unwrap_or(u16::MAX);
            let end = col.saturating_add(label_width).saturating_add(mark + 2);
            self.chips.push(Chip {
                id: item.id.get(),
                start: col,
                end,
                remove: self.remove_buttons.then_some(end.saturating_sub(2)),
            });
            col = end.saturating_add(1);
        }
    }

    /// Resolve a terminal cell to the part of the picker drawn there.
    pub fn hit_test(&self, column: u16, row: u16) -> Hit {
        if column >= self.width {
            return Hit::Outside;
        }
        match row {
            ITEMS_ROW => self
                .chips
                .iter()
                .find(|chip| (chip.start..chip.end).contains(&column))
                .map(|chip| match chip.remove {
                    Some(mark) if column == mark => Hit::RemoveButton(chip.id),
                    _ => Hit::Item(chip.id),
                })
                .unwrap_or(Hit::Widget),
            INPUT_ROW => Hit::Input,
            row if row < ITEMS_ROW => Hit::Widget,
            row if self.view.container.is_open() => {
                let offset = (row - DROPDOWN_TOP) as usize;
                if offset >= self.dropdown_rows() {
                    return Hit::Outside;
                }
                let index = offset + self.scroll_top.max(0) as usize;
                match self.view.dropdown.get(index).and_then(DropdownEntry::choice_id) {
                    Some(id) => Hit::Choice(id.get()),
                    None => Hit::Dropdown,
                }
            }
            _ => Hit::Outside,
        }
    }

    /// Redraw if anything changed since the last draw.
    pub fn draw(&mut self, out: &mut impl Write) -> io::Result<()> {
        if !self.dirty {
            return Ok(());
        }
        self.dirty = false;

        queue!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            SetAttribute(Attribute::Bold),
            Print(&self.title),
            SetAttribute(Attribute::Reset),
        )?;
        if self.view.container.disabled {
            queue!(out, Print("  (disabled)"))?;
        }

        for (chip, item) in self.chips.iter().zip(&self.view.items) {
            queue!(out, cursor::MoveTo(chip.start, ITEMS_ROW))?;
            if item.selected {
                queue!(out, SetAttribute(Attribute::Reverse))?;
            }
            let mark = if chip.remove.is_some() { REMOVE_MARK } else { "" };
            queue!(
                out,
                Print(format!("[{}{mark}]", item.label)),
                SetAttribute(Attribute::Reset)
            )?;
        }

        queue!(out, cursor::MoveTo(0, INPUT_ROW), Print("> "))?;
        let input = &self.view.input;
        if input.value.is_empty() {
            if let Some(placeholder) = &input.placeholder {
                queue!(
                    out,
                    SetAttribute(Attribute::Dim),
                    Print(placeholder),
                    SetAttribute(Attribute::Reset)
                )?;
            }
        } else {
            queue!(out, Print(&input.value))?;
        }

        if self.view.container.is_open() {
            self.draw_dropdown(out)?;
        }

        let value = match &self.view.passed_value {
            Some(PassedValue::Text(text)) => text.clone(),
            Some(PassedValue::Options { options, .. }) => options
                .iter()
                .map(|option| option.value.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            None => String::new(),
        };
        queue!(
            out,
            cursor::MoveTo(0, self.height.saturating_sub(1)),
            SetAttribute(Attribute::Dim),
            Print(format!("value: [{value}]  Ctrl+Q quits")),
            SetAttribute(Attribute::Reset)
        )?;
        out.flush()
    }

    fn draw_dropdown(&self, out: &mut impl Write) -> io::Result<()> {
        let first = self.scroll_top.max(0) as usize;
        let rows = self.dropdown_rows();
        let marker = if self.view.container.is_flipped() { "^" } else { "v" };

        for (row, entry) in self.view.dropdown.iter().skip(first).take(rows).enumerate() {
            queue!(out, cursor::MoveTo(0, DROPDOWN_TOP + row as u16), Print(marker), Print(" "))?;
            match entry {
                DropdownEntry::Group { label, .. } => {
                    queue!(
                        out,
                        SetAttribute(Attribute::Bold),
                        Print(label),
                        SetAttribute(Attribute::Reset)
                    )?;
                }
                DropdownEntry::Choice {
                    id,
                    label,
                    selectable,
                    selected,
                    ..
                } => {
                    if self.view.highlighted == Some(*id) {
                        queue!(out, SetAttribute(Attribute::Reverse))?;
                    }
                    if !selectable {
                        queue!(out, SetAttribute(Attribute::Dim))?;
                    }
                    let check = if *selected { "* " } else { "  " };
                    queue!(out, Print(check), Print(label), SetAttribute(Attribute::Reset))?;
                }
                DropdownEntry::Notice { text, .. } => {
                    queue!(
                        out,
                        SetAttribute(Attribute::Italic),
                        Print(strip_tags(text)),
                        SetAttribute(Attribute::Reset)
                    )?;
                }
            }
        }
        Ok(())
    }
}

impl Host for TerminalHost {
    fn viewport(&self) -> Viewport {
        Viewport {
            dropdown_top: DROPDOWN_TOP as i32,
            dropdown_height: self.view.dropdown.len().min(MAX_DROPDOWN_ROWS) as i32,
            scroll_y: 0,
            window_height: self.height as i32,
        }
    }

    fn dropdown_metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.scroll_top, self.dropdown_rows() as i32)
    }

    fn choice_bounds(&self, id: ChoiceId) -> Option<Bounds> {
        self.view
            .dropdown
            .iter()
            .position(|entry| entry.choice_id() == Some(id))
            .map(|row| Bounds::new(row as i32, 1))
    }

    fn set_scroll_top(&mut self, scroll_top: i32) {
        if self.scroll_top != scroll_top {
            self.scroll_top = scroll_top;
            self.dirty = true;
        }
    }

    fn render(&mut self, frame: &Frame) {
        self.view.apply(frame);
        if frame.items.is_some() {
            self.layout_chips();
        }
        self.dirty = true;
    }
}

/// Drop markup tags from notice text.
fn strip_tags(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => plain.push(c),
            _ => {}
        }
    }
    plain
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

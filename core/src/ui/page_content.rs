//! Static content blocks, one per [`ContentKind`].
//!
//! Pure data entry: a switch from the content tag to fixed text and
//! decoration. Layout inside a block is a running `y` cursor.

extern crate alloc;

use alloc::string::String;

use embedded_graphics::{
    Drawable,
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_6X13, FONT_7X13_BOLD, FONT_10X20},
    },
    pixelcolor::Rgb888,
    prelude::{Point, Primitive, Size},
    primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Baseline, Text},
};

use crate::content::ContentKind;
use crate::framebuffer::DisplayBuffers;
use crate::photo::Photo;
use crate::ui::geom::Rect;
use crate::ui::palette;

const PAD: i32 = 26;
const LINE_GAP: i32 = 3;

pub fn render_page(
    buffers: &mut DisplayBuffers,
    rect: Rect,
    kind: ContentKind,
    photo: Option<&Photo>,
) {
    match kind {
        ContentKind::Cover => cover(buffers, rect, photo),
        ContentKind::Intro => intro(buffers, rect),
        ContentKind::Summary => summary(buffers, rect),
        ContentKind::Skills => skills(buffers, rect),
        ContentKind::Experience => experience(buffers, rect),
        ContentKind::ExperienceCont => experience_cont(buffers, rect),
        ContentKind::Education => education(buffers, rect),
        ContentKind::Certifications => certifications(buffers, rect),
        ContentKind::Projects => projects(buffers, rect),
        ContentKind::Contact => contact(buffers, rect),
        ContentKind::BackCover => back_cover(buffers, rect),
    }
}

fn body_style() -> MonoTextStyle<'static, Rgb888> {
    MonoTextStyle::new(&FONT_6X13, palette::INK_SOFT)
}

fn label_style() -> MonoTextStyle<'static, Rgb888> {
    MonoTextStyle::new(&FONT_7X13_BOLD, palette::INK)
}

fn fine_style() -> MonoTextStyle<'static, Rgb888> {
    MonoTextStyle::new(&FONT_6X10, palette::MUTED)
}

fn fill(buffers: &mut DisplayBuffers, rect: Rect, color: Rgb888) {
    Rectangle::from(rect)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(buffers)
        .ok();
}

fn line(buffers: &mut DisplayBuffers, text: &str, at: Point, style: MonoTextStyle<'static, Rgb888>) {
    Text::with_baseline(text, at, style, Baseline::Top)
        .draw(buffers)
        .ok();
}

fn centered(
    buffers: &mut DisplayBuffers,
    text: &str,
    center_x: i32,
    y: i32,
    style: MonoTextStyle<'static, Rgb888>,
) {
    let width = text.len() as i32 * style.font.character_size.width as i32;
    line(buffers, text, Point::new(center_x - width / 2, y), style);
}

/// Word-wraps `text` into `max_width` pixels and draws it; returns the
/// y just below the last line.
fn wrapped(
    buffers: &mut DisplayBuffers,
    text: &str,
    origin: Point,
    max_width: i32,
    style: MonoTextStyle<'static, Rgb888>,
) -> i32 {
    let char_w = style.font.character_size.width as i32;
    let line_h = style.font.character_size.height as i32 + LINE_GAP;
    let cols = (max_width / char_w).max(1) as usize;
    let mut y = origin.y;
    let mut current = String::new();
    for word in text.split_whitespace() {
        let joined = if current.is_empty() {
            word.len()
        } else {
            current.len() + 1 + word.len()
        };
        if joined > cols && !current.is_empty() {
            line(buffers, &current, Point::new(origin.x, y), style);
            y += line_h;
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        line(buffers, &current, Point::new(origin.x, y), style);
        y += line_h;
    }
    y
}

/// Section heading with the double rule the reference layout uses.
fn heading(buffers: &mut DisplayBuffers, rect: Rect, title: &str, subtitle: Option<&str>) -> i32 {
    let inner = rect.inset(PAD);
    let style = MonoTextStyle::new(&FONT_10X20, palette::INK);
    line(buffers, title, Point::new(inner.x, inner.y), style);
    let mut y = inner.y + 24;
    if let Some(subtitle) = subtitle {
        line(buffers, subtitle, Point::new(inner.x, y), fine_style());
        y += 14;
    }
    fill(buffers, Rect::new(inner.x, y, inner.w, 2), palette::ACCENT);
    y + 14
}

fn bullet(buffers: &mut DisplayBuffers, text: &str, x: i32, y: i32, max_width: i32) -> i32 {
    fill(buffers, Rect::new(x, y + 4, 4, 4), palette::ACCENT);
    wrapped(buffers, text, Point::new(x + 12, y), max_width - 12, body_style())
}

/// Pill-shaped tag, as on the project cards.
fn chip(buffers: &mut DisplayBuffers, label: &str, x: i32, y: i32) -> i32 {
    let text_w = label.len() as i32 * 6;
    let rect = Rect::new(x, y, text_w + 16, 17);
    RoundedRectangle::with_equal_corners(Rectangle::from(rect), Size::new(8, 8))
        .into_styled(PrimitiveStyle::with_fill(palette::ACCENT))
        .draw(buffers)
        .ok();
    line(
        buffers,
        label,
        Point::new(x + 8, y + 3),
        MonoTextStyle::new(&FONT_6X10, palette::PAPER),
    );
    rect.bottom()
}

/// Tinted card with the left accent bar used by boxed sections.
fn accent_box(buffers: &mut DisplayBuffers, rect: Rect) {
    fill(buffers, rect, palette::ACCENT_FILL);
    fill(buffers, Rect::new(rect.x, rect.y, 4, rect.h), palette::ACCENT);
}

fn cover(buffers: &mut DisplayBuffers, rect: Rect, photo: Option<&Photo>) {
    fill(buffers, rect, palette::COVER_BG);
    let cx = rect.center_x();
    let mut y = rect.y + rect.h / 5;

    let portrait = 128;
    let portrait_rect = Rect::new(cx - portrait / 2, y, portrait, portrait);
    match photo {
        Some(photo) => photo.draw_circular(buffers, portrait_rect),
        None => {
            Circle::new(Point::new(portrait_rect.x, portrait_rect.y), portrait as u32)
                .into_styled(PrimitiveStyle::with_fill(palette::SPINE_EDGE))
                .draw(buffers)
                .ok();
        }
    }
    Circle::new(Point::new(portrait_rect.x - 3, portrait_rect.y - 3), portrait as u32 + 6)
        .into_styled(PrimitiveStyle::with_stroke(palette::COVER_RING, 3))
        .draw(buffers)
        .ok();
    y += portrait + 30;

    centered(
        buffers,
        "MUSA BANATHI NKOSI",
        cx,
        y,
        MonoTextStyle::new(&FONT_10X20, palette::PAPER),
    );
    y += 30;
    fill(buffers, Rect::new(cx - 56, y, 112, 1), palette::COVER_RING);
    y += 12;
    centered(
        buffers,
        "Software Developer & QA Tester",
        cx,
        y,
        MonoTextStyle::new(&FONT_6X13, palette::COVER_TEXT),
    );
    y += 34;

    let badge = "Professional Portfolio";
    let badge_w = badge.len() as i32 * 6 + 24;
    let badge_rect = Rect::new(cx - badge_w / 2, y, badge_w, 21);
    RoundedRectangle::with_equal_corners(Rectangle::from(badge_rect), Size::new(10, 10))
        .into_styled(PrimitiveStyle::with_fill(palette::SPINE_EDGE))
        .draw(buffers)
        .ok();
    centered(buffers, badge, cx, y + 5, MonoTextStyle::new(&FONT_6X10, palette::COVER_TEXT));
}

fn intro(buffers: &mut DisplayBuffers, rect: Rect) {
    let mut y = heading(buffers, rect, "About Me", Some("A Journey of Development & Quality"));
    let inner = rect.inset(PAD);
    y += 6;
    for paragraph in [
        "Welcome to my professional portfolio. I'm a passionate \
         technologist who thrives at the intersection of development \
         and quality assurance.",
        "With a strong foundation in software development and a keen \
         eye for detail in testing, I bring a unique perspective to \
         building robust applications.",
        "Based in Cape Town, South Africa, I'm committed to delivering \
         high-quality software solutions that make a difference.",
    ] {
        y = wrapped(buffers, paragraph, Point::new(inner.x, y), inner.w, body_style()) + 10;
    }
}

fn summary(buffers: &mut DisplayBuffers, rect: Rect) {
    let y = heading(buffers, rect, "Professional Summary", None);
    let inner = rect.inset(PAD);
    let card = Rect::new(inner.x, y + 6, inner.w, inner.bottom() - y - 60);
    accent_box(buffers, card);
    let text_x = card.x + 16;
    let text_w = card.w - 32;
    let mut ty = card.y + 14;
    ty = wrapped(
        buffers,
        "Adaptable Software Developer & QA Tester with experience in \
         Java, Kotlin, Python, SQL, and manual testing. Skilled in \
         backend development, UI design, and quality assurance, with \
         proven ability to reduce production bugs and deliver projects \
         on time.",
        Point::new(text_x, ty),
        text_w,
        body_style(),
    ) + 12;
    wrapped(
        buffers,
        "Strong collaborator in Agile/Scrum teams, committed to \
         building robust, user-focused applications and ensuring \
         high-quality software delivery.",
        Point::new(text_x, ty),
        text_w,
        body_style(),
    );
}

fn skills(buffers: &mut DisplayBuffers, rect: Rect) {
    let mut y = heading(buffers, rect, "Technical Skills", None);
    let inner = rect.inset(PAD);
    y += 4;
    for (group, detail) in [
        ("Programming", "Java, Kotlin, Python, C#, C++, SQL"),
        ("Testing & QA", "Manual QA, Test Case Design, Bug Tracking, Jira"),
        ("Web Development", "HTML, CSS (Basic)"),
        ("Tools & Platforms", "Git, Postman, AWS (Fundamentals)"),
        ("Methodologies", "Agile, Scrum"),
    ] {
        let card = Rect::new(inner.x, y, inner.w, 44);
        fill(buffers, card, palette::ACCENT_FILL);
        line(buffers, group, Point::new(card.x + 12, card.y + 7), label_style());
        line(buffers, detail, Point::new(card.x + 12, card.y + 24), body_style());
        y = card.bottom() + 10;
    }
}

fn experience(buffers: &mut DisplayBuffers, rect: Rect) {
    let mut y = heading(buffers, rect, "Professional Experience", None);
    let inner = rect.inset(PAD);
    y += 6;

    // Timeline marker and rail, as in the reference layout.
    fill(buffers, Rect::new(inner.x, y + 4, 2, inner.bottom() - y - 40), palette::RULE_LINE);
    fill(buffers, Rect::new(inner.x - 3, y, 8, 8), palette::ACCENT);

    let x = inner.x + 18;
    let w = inner.w - 18;
    line(buffers, "QA Tester (Internship)", Point::new(x, y), label_style());
    y += 16;
    line(buffers, "Plum Systems - Cape Town", Point::new(x, y), fine_style());
    y += 12;
    line(buffers, "Jan 2025 - Present", Point::new(x, y), fine_style());
    y += 20;
    y = bullet(
        buffers,
        "Executed manual testing for 10+ Java/Kotlin applications, \
         ensuring functionality, performance, and reliability",
        x,
        y,
        w,
    ) + 8;
    bullet(
        buffers,
        "Designed and executed test cases, reducing production bugs by 20%",
        x,
        y,
        w,
    );
}

fn experience_cont(buffers: &mut DisplayBuffers, rect: Rect) {
    let mut y = heading(buffers, rect, "Experience (cont.)", None);
    let inner = rect.inset(PAD);
    y += 6;
    fill(buffers, Rect::new(inner.x, y + 4, 2, inner.bottom() - y - 40), palette::RULE_LINE);
    fill(buffers, Rect::new(inner.x - 3, y, 8, 8), palette::ACCENT);

    let x = inner.x + 18;
    let w = inner.w - 18;
    y = bullet(
        buffers,
        "Collaborated with developers in Agile sprints, accelerating \
         feature delivery",
        x,
        y,
        w,
    ) + 8;
    y = bullet(
        buffers,
        "Logged and tracked defects in Jira, improving visibility and \
         resolution speed",
        x,
        y,
        w,
    ) + 22;

    fill(buffers, Rect::new(inner.x - 3, y, 8, 8), palette::ACCENT);
    line(buffers, "Student Developer", Point::new(x, y), label_style());
    y += 16;
    line(
        buffers,
        "Cape Peninsula University of Technology",
        Point::new(x, y),
        fine_style(),
    );
    y += 12;
    line(buffers, "Feb 2023 - Oct 2023", Point::new(x, y), fine_style());
    y += 20;
    y = bullet(buffers, "Built a Python/SQL backend for tutoring website", x, y, w) + 8;
    y = bullet(buffers, "Designed UI wireframes and registration workflows", x, y, w) + 8;
    bullet(buffers, "Facilitated conflict resolution within project team", x, y, w);
}

fn education(buffers: &mut DisplayBuffers, rect: Rect) {
    let mut y = heading(buffers, rect, "Education", None);
    let inner = rect.inset(PAD);
    y += 4;
    for (title, detail, place, years) in [
        (
            "Diploma in ICT",
            Some("Applications Development"),
            "Cape Peninsula University of Technology",
            "2022 - Present",
        ),
        ("Digital Marketing Certificate", None, "MANCOSA", "2023 - 2024"),
        (
            "Higher Certificate in ICT",
            None,
            "Cape Peninsula University of Technology",
            "2021 - 2022",
        ),
    ] {
        let h = if detail.is_some() { 72 } else { 60 };
        let card = Rect::new(inner.x, y, inner.w, h);
        accent_box(buffers, card);
        let x = card.x + 16;
        let mut ty = card.y + 10;
        line(buffers, title, Point::new(x, ty), label_style());
        ty += 17;
        if let Some(detail) = detail {
            line(buffers, detail, Point::new(x, ty), body_style());
            ty += 15;
        }
        line(buffers, place, Point::new(x, ty), fine_style());
        ty += 13;
        line(buffers, years, Point::new(x, ty), fine_style());
        y = card.bottom() + 12;
    }
}

fn certifications(buffers: &mut DisplayBuffers, rect: Rect) {
    let mut y = heading(buffers, rect, "Certifications", None);
    let inner = rect.inset(PAD);
    y += 4;
    for (title, issuer) in [
        ("AWS Fundamentals", "Nerds Academy, 2025"),
        ("Python Programming", "Mosh, 2025"),
        ("Manual Software Testing", "Pavan, 2025"),
    ] {
        let card = Rect::new(inner.x, y, inner.w, 48);
        fill(buffers, card, palette::ACCENT_FILL);
        fill(buffers, Rect::new(card.x + 12, card.y + 14, 8, 8), palette::ACCENT);
        line(buffers, title, Point::new(card.x + 30, card.y + 9), label_style());
        line(buffers, issuer, Point::new(card.x + 30, card.y + 27), fine_style());
        y = card.bottom() + 12;
    }
}

fn projects(buffers: &mut DisplayBuffers, rect: Rect) {
    let mut y = heading(buffers, rect, "Featured Projects", None);
    let inner = rect.inset(PAD);
    y += 4;
    for (title, tag, blurb) in [
        (
            "Tutoring Platform",
            "Python/SQL",
            "Developed secure user authentication and designed \
             responsive UI for an educational platform. Built scalable \
             backend architecture.",
        ),
        (
            "Enrollment System",
            "Database Design",
            "Optimized data flow architecture and integrated network \
             components for efficient student enrollment management.",
        ),
    ] {
        let card = Rect::new(inner.x, y, inner.w, 110);
        fill(buffers, card, palette::ACCENT_FILL);
        let x = card.x + 16;
        let mut ty = card.y + 12;
        line(buffers, title, Point::new(x, ty), label_style());
        ty += 18;
        ty = chip(buffers, tag, x, ty) + 8;
        wrapped(buffers, blurb, Point::new(x, ty), card.w - 32, body_style());
        y = card.bottom() + 14;
    }
}

fn contact(buffers: &mut DisplayBuffers, rect: Rect) {
    let mut y = heading(buffers, rect, "Get In Touch", None);
    let inner = rect.inset(PAD);
    y += 6;

    let card = Rect::new(inner.x, y, inner.w, 94);
    fill(buffers, card, palette::ACCENT_FILL);
    let x = card.x + 16;
    let mut ty = card.y + 10;
    line(buffers, "Contact Information", Point::new(x, ty), label_style());
    ty += 20;
    for entry in [
        "Foreshore, Cape Town, 8001",
        "067 747 5778",
        "mbnkosi08@gmail.com",
    ] {
        line(buffers, entry, Point::new(x, ty), body_style());
        ty += 16;
    }
    y = card.bottom() + 14;

    let card = Rect::new(inner.x, y, inner.w, 104);
    accent_box(buffers, card);
    let x = card.x + 16;
    let mut ty = card.y + 10;
    line(buffers, "Reference", Point::new(x, ty), label_style());
    ty += 20;
    line(buffers, "Irfaan Braaf", Point::new(x, ty), body_style());
    ty += 15;
    line(buffers, "Team Leader, Plum Systems", Point::new(x, ty), fine_style());
    ty += 18;
    line(buffers, "068 281 2839", Point::new(x, ty), fine_style());
    ty += 13;
    line(buffers, "irfaan@plum.systems", Point::new(x, ty), fine_style());
}

fn back_cover(buffers: &mut DisplayBuffers, rect: Rect) {
    fill(buffers, rect, palette::COVER_BG);
    let cx = rect.center_x();
    let mut y = rect.y + rect.h / 3;
    Circle::new(Point::new(cx - 28, y), 56)
        .into_styled(PrimitiveStyle::with_fill(palette::SPINE_EDGE))
        .draw(buffers)
        .ok();
    // Open-book mark inside the disc.
    fill(buffers, Rect::new(cx - 17, y + 19, 15, 18), palette::COVER_TEXT);
    fill(buffers, Rect::new(cx + 2, y + 19, 15, 18), palette::COVER_TEXT);
    y += 80;
    centered(
        buffers,
        "Thank you for exploring my portfolio",
        cx,
        y,
        MonoTextStyle::new(&FONT_6X13, palette::COVER_TEXT),
    );
    y += 22;
    fill(buffers, Rect::new(cx - 40, y, 80, 1), palette::COVER_RING);
    y += 12;
    centered(
        buffers,
        "Let's build something amazing together",
        cx,
        y,
        MonoTextStyle::new(&FONT_6X10, palette::COVER_MUTED),
    );
}

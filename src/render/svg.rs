use crate::{
    dsp::convolve::convolve,
    foundation::core::{Point, Rect, Rgba8},
    render::frame::RenderSettings,
    stage::{
        breakdown::Breakdown,
        chart::OutputChart,
        layout::{STEM_HEAD_RADIUS, STEM_WIDTH, StageLayout, StageRow},
        palette,
        scene::StageScene,
    },
};

const MARGIN: f64 = 20.0;
const TITLE_HEIGHT: f64 = 50.0;
const PANEL_GAP: f64 = 16.0;
const BREAKDOWN_LINE: f64 = 20.0;
const BREAKDOWN_PAD: f64 = 24.0;
const CHART_HEIGHT: f64 = 280.0;

/// Panel placement for a whole stage document.
///
/// Depends only on operand lengths and settings, never on `n`, so every frame
/// of a sweep has the same pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DocumentLayout {
    /// Document width.
    pub width: f64,
    /// Document height.
    pub height: f64,
    /// Stage panel.
    pub stage: Rect,
    /// Breakdown panel, when shown.
    pub breakdown: Option<Rect>,
    /// Chart panel, when shown.
    pub chart: Option<Rect>,
}

impl DocumentLayout {
    /// Place the panels for operands of the given lengths.
    pub fn new(x_len: usize, h_len: usize, settings: &RenderSettings) -> Self {
        let stage_layout = StageLayout::new(x_len, h_len);
        let width = stage_layout.width + 2.0 * MARGIN;

        let mut y = MARGIN + TITLE_HEIGHT;
        let stage = Rect::new(MARGIN, y, MARGIN + stage_layout.width, y + stage_layout.height);
        y = stage.y1 + PANEL_GAP;

        let breakdown = if settings.show_breakdown {
            // caption + headline + one line per possible overlap term
            let lines = 2.0 + x_len.min(h_len).max(1) as f64;
            let r = Rect::new(
                MARGIN,
                y,
                width - MARGIN,
                y + BREAKDOWN_PAD + lines * BREAKDOWN_LINE,
            );
            y = r.y1 + PANEL_GAP;
            Some(r)
        } else {
            None
        };

        let chart = if settings.show_chart {
            let r = Rect::new(MARGIN, y, width - MARGIN, y + CHART_HEIGHT);
            y = r.y1 + PANEL_GAP;
            Some(r)
        } else {
            None
        };

        Self {
            width,
            height: y - PANEL_GAP + MARGIN,
            stage,
            breakdown,
            chart,
        }
    }
}

/// Plot area of the chart inside its panel.
pub fn chart_plot_rect(panel: Rect) -> Rect {
    Rect::new(panel.x0 + 50.0, panel.y0 + 60.0, panel.x1 - 30.0, panel.y1 - 30.0)
}

/// Emit a standalone SVG document showing `x * h` at scanning index `n`.
#[tracing::instrument(skip(x, h, settings), fields(x_len = x.len(), h_len = h.len()))]
pub fn render_stage_svg(x: &[f64], h: &[f64], n: i64, settings: &RenderSettings) -> String {
    let doc = DocumentLayout::new(x.len(), h.len(), settings);
    let scene = StageScene::build(x, h, n);

    let mut w = SvgWriter::new(doc.width, doc.height);
    w.rect(
        Rect::new(0.0, 0.0, doc.width, doc.height),
        settings.background,
        None,
        0.0,
    );

    w.text(
        Point::new(MARGIN, MARGIN + 30.0),
        &Text::new("y[n] = x[n] ∗ h[n]", 24.0, palette::TEXT).bold(),
    );
    w.text(
        Point::new(doc.width - MARGIN, MARGIN + 30.0),
        &Text::new(format!("n = {n}"), 18.0, palette::TEXT)
            .bold()
            .mono()
            .anchor("end"),
    );

    panel(&mut w, doc.stage);
    w.open_group(doc.stage.x0, doc.stage.y0);
    draw_stage(&mut w, &scene);
    w.close_group();

    if let Some(rect) = doc.breakdown {
        panel(&mut w, rect);
        draw_breakdown(&mut w, rect, &Breakdown::build(x, h, &scene.step));
    }

    if let Some(rect) = doc.chart {
        panel(&mut w, rect);
        let y = convolve(x, h);
        draw_chart(&mut w, rect, &OutputChart::build(&y, n, chart_plot_rect(rect)));
    }

    w.finish()
}

fn panel(w: &mut SvgWriter, rect: Rect) {
    w.rect(rect, palette::PANEL, Some((palette::AXIS, 1.0)), 12.0);
}

fn draw_stage(w: &mut SvgWriter, scene: &StageScene) {
    let layout = &scene.layout;
    let n = scene.n;
    let row_h = StageLayout::row_center(StageRow::Fixed);
    let row_x = StageLayout::row_center(StageRow::Moving);
    let row_p = StageLayout::row_center(StageRow::Product);

    w.text(
        Point::new(10.0, row_h - 50.0),
        &Text::new("Impulse response: h[k]", 14.0, palette::FIXED).bold(),
    );
    w.text(
        Point::new(10.0, row_x - 50.0),
        &Text::new(format!("Shifted input: x[{n}-k]"), 14.0, palette::MOVING).bold(),
    );
    w.text(
        Point::new(10.0, row_p - 50.0),
        &Text::new(format!("Product: w[{n}, k]"), 14.0, palette::PRODUCT).bold(),
    );
    w.text(
        Point::new(10.0, row_p - 35.0),
        &Text::new(format!("h[k] · x[{n}-k]"), 10.0, palette::MUTED),
    );

    for row_y in [row_h, row_x, row_p] {
        w.line(
            Point::new(0.0, row_y),
            Point::new(layout.width, row_y),
            &Stroke::new(palette::AXIS, 2.0),
        );
    }

    for k in layout.ks() {
        let px = layout.k_to_px(k);
        for row_y in [row_h, row_x, row_p] {
            w.circle(Point::new(px, row_y), 2.0, palette::TICK);
        }
        w.text(
            Point::new(px, row_p + 20.0),
            &Text::new(k.to_string(), 10.0, palette::MUTED).anchor("middle"),
        );
    }

    for stem in &scene.fixed {
        draw_stem(w, stem.base, stem.tip, palette::FIXED);
        w.text(
            Point::new(stem.tip.x + 8.0, stem.tip.y),
            &Text::new(short_num(stem.value), 12.0, palette::FIXED).opacity(0.5),
        );
    }

    for stem in &scene.moving {
        draw_stem(w, stem.base, stem.tip, palette::MOVING);
        w.text(
            Point::new(stem.tip.x + 8.0, stem.tip.y),
            &Text::new(short_num(stem.value), 12.0, palette::MUTED).opacity(0.5),
        );
        if stem.overlap {
            w.line(
                Point::new(stem.base.x, row_h + 10.0),
                Point::new(stem.base.x, row_p - 10.0),
                &Stroke::new(palette::PRODUCT, 1.0).dashed("4").opacity(0.3),
            );
        }
    }

    for stem in &scene.products {
        draw_stem(w, stem.base, stem.tip, palette::PRODUCT);
        w.text(
            Point::new(stem.tip.x + 8.0, stem.tip.y),
            &Text::new(short_num(stem.value), 12.0, palette::PRODUCT_LABEL).bold(),
        );
    }
}

fn draw_stem(w: &mut SvgWriter, base: Point, tip: Point, color: Rgba8) {
    w.line(base, tip, &Stroke::new(color, STEM_WIDTH));
    w.circle(tip, STEM_HEAD_RADIUS, color);
}

fn draw_breakdown(w: &mut SvgWriter, rect: Rect, breakdown: &Breakdown) {
    let x0 = rect.x0 + 16.0;
    let mut y = rect.y0 + BREAKDOWN_PAD;

    w.text(
        Point::new(x0, y),
        &Text::new(format!("Sum for n = {}", breakdown.n), 14.0, palette::TEXT).bold(),
    );
    w.text(
        Point::new(rect.x1 - 16.0, y),
        &Text::new(
            format!("Perspective: {}", breakdown.caption()),
            12.0,
            palette::MUTED,
        )
        .anchor("end"),
    );

    y += BREAKDOWN_LINE;
    w.text(
        Point::new(x0, y),
        &Text::new(breakdown.headline(), 14.0, palette::TEXT).mono(),
    );

    for line in breakdown.detail_lines() {
        y += BREAKDOWN_LINE;
        w.text(
            Point::new(x0 + 16.0, y),
            &Text::new(line, 12.0, palette::PRODUCT_LABEL).mono(),
        );
    }
}

fn draw_chart(w: &mut SvgWriter, panel: Rect, chart: &OutputChart) {
    w.text(
        Point::new(panel.x0 + 16.0, panel.y0 + 28.0),
        &Text::new("OUTPUT SIGNAL y[n]", 13.0, palette::MUTED).bold(),
    );
    w.text(
        Point::new(panel.x1 - 16.0, panel.y0 + 20.0),
        &Text::new("current value", 11.0, palette::MUTED).anchor("end"),
    );
    let current = chart
        .current
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "--".to_string());
    w.text(
        Point::new(panel.x1 - 16.0, panel.y0 + 44.0),
        &Text::new(current, 22.0, palette::BAR_CURRENT)
            .bold()
            .anchor("end"),
    );

    let frame = chart.frame;
    for (value, py) in chart.grid() {
        w.line(
            Point::new(frame.x0, py),
            Point::new(frame.x1, py),
            &Stroke::new(palette::AXIS, 1.0).dashed("3 3"),
        );
        w.text(
            Point::new(frame.x0 - 8.0, py + 4.0),
            &Text::new(short_num(value), 12.0, palette::MUTED).anchor("end"),
        );
    }

    for bar in &chart.bars {
        let stroke = bar.state.stroke().map(|c| (c, 2.0));
        w.rect(bar.rect, bar.state.fill(), stroke, 4.0);
        w.text(
            Point::new(bar.label_x, frame.y1 + 18.0),
            &Text::new(bar.index.to_string(), 12.0, palette::MUTED).anchor("middle"),
        );
    }

    w.line(
        Point::new(frame.x0, chart.baseline_y),
        Point::new(frame.x1, chart.baseline_y),
        &Stroke::new(palette::BASELINE, 1.0),
    );
}

/// Two-decimal number without trailing zeros: `0.10 -> 0.1`, `1.00 -> 1`.
pub fn short_num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn paint(c: Rgba8) -> (String, f64) {
    (
        Rgba8 { a: 255, ..c }.to_hex(),
        f64::from(c.a) / 255.0,
    )
}

struct Stroke {
    color: Rgba8,
    width: f64,
    dash: Option<&'static str>,
    opacity: f64,
}

impl Stroke {
    fn new(color: Rgba8, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
            opacity: 1.0,
        }
    }

    fn dashed(mut self, dash: &'static str) -> Self {
        self.dash = Some(dash);
        self
    }

    fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

struct Text {
    content: String,
    size: f64,
    color: Rgba8,
    bold: bool,
    mono: bool,
    anchor: &'static str,
    opacity: f64,
}

impl Text {
    fn new(content: impl Into<String>, size: f64, color: Rgba8) -> Self {
        Self {
            content: content.into(),
            size,
            color,
            bold: false,
            mono: false,
            anchor: "start",
            opacity: 1.0,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn mono(mut self) -> Self {
        self.mono = true;
        self
    }

    fn anchor(mut self, anchor: &'static str) -> Self {
        self.anchor = anchor;
        self
    }

    fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

struct SvgWriter {
    out: String,
}

impl SvgWriter {
    fn new(width: f64, height: f64) -> Self {
        let mut out = String::with_capacity(16 * 1024);
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        ));
        out.push('\n');
        Self { out }
    }

    fn open_group(&mut self, dx: f64, dy: f64) {
        self.out
            .push_str(&format!("<g transform=\"translate({dx} {dy})\">\n"));
    }

    fn close_group(&mut self) {
        self.out.push_str("</g>\n");
    }

    fn line(&mut self, p0: Point, p1: Point, stroke: &Stroke) {
        let (hex, alpha) = paint(stroke.color);
        self.out.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{hex}" stroke-width="{}" stroke-opacity="{}""#,
            p0.x,
            p0.y,
            p1.x,
            p1.y,
            stroke.width,
            alpha * stroke.opacity
        ));
        if let Some(dash) = stroke.dash {
            self.out.push_str(&format!(r#" stroke-dasharray="{dash}""#));
        }
        self.out.push_str("/>\n");
    }

    fn circle(&mut self, c: Point, r: f64, fill: Rgba8) {
        let (hex, alpha) = paint(fill);
        self.out.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{r}" fill="{hex}" fill-opacity="{alpha}"/>"#,
            c.x, c.y
        ));
        self.out.push('\n');
    }

    fn rect(&mut self, r: Rect, fill: Rgba8, stroke: Option<(Rgba8, f64)>, radius: f64) {
        let (hex, alpha) = paint(fill);
        self.out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" fill="{hex}" fill-opacity="{alpha}""#,
            r.x0,
            r.y0,
            r.width(),
            r.height()
        ));
        if let Some((color, width)) = stroke {
            let (shex, salpha) = paint(color);
            self.out.push_str(&format!(
                r#" stroke="{shex}" stroke-width="{width}" stroke-opacity="{salpha}""#
            ));
        }
        self.out.push_str("/>\n");
    }

    fn text(&mut self, at: Point, text: &Text) {
        let (hex, alpha) = paint(text.color);
        let family = if text.mono { "monospace" } else { "sans-serif" };
        let weight = if text.bold { "bold" } else { "normal" };
        self.out.push_str(&format!(
            r#"<text x="{}" y="{}" font-family="{family}" font-size="{}" font-weight="{weight}" text-anchor="{}" fill="{hex}" fill-opacity="{}">{}</text>"#,
            at.x,
            at.y,
            text.size,
            text.anchor,
            alpha * text.opacity,
            escape_xml(&text.content)
        ));
        self.out.push('\n');
    }

    fn finish(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;

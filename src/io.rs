use std::{f32::consts::PI, fs};

use anyhow::Context;
use plotters::prelude::*;
use raqote::{
    DrawOptions, DrawTarget, Path, PathBuilder, SolidSource, Source, StrokeStyle,
};
use serde::Serialize;

use crate::{
    cli::VizConfig,
    potentials::{PairPotential, PotentialModel},
    session::Session,
};

const MARKER_COLOR: RGBColor = RGBColor(0xe7, 0x4c, 0x3c);

pub fn model_color(model: &PotentialModel) -> RGBColor {
    match model {
        PotentialModel::LennardJones(_) => RGBColor(0x2e, 0x86, 0xc1),
        PotentialModel::HardSphere(_) => RGBColor(0x28, 0xb4, 0x63),
        PotentialModel::SquareWell(_) => RGBColor(0xe6, 0x7e, 0x22),
        PotentialModel::Sutherland(_) => RGBColor(0x8e, 0x44, 0xad),
        PotentialModel::Morse(_) => RGBColor(0xc0, 0x39, 0x2b),
        PotentialModel::Buckingham(_) => RGBColor(0x16, 0xa0, 0x85),
        PotentialModel::Yukawa(_) => RGBColor(0xd4, 0xac, 0x0d),
        PotentialModel::Mie(_) => RGBColor(0x34, 0x49, 0x5e),
    }
}

/// V(r) over the plot window with the current distance marked
pub fn write_potential_png(session: &Session, pathname: &str) -> anyhow::Result<()> {
    let model = &session.model;
    let window = session.plot_window();
    let curve = session.curve();
    let color = model_color(model);

    let root_area = BitMapBackend::new(pathname, (1000, 700)).into_drawing_area();
    root_area.fill(&WHITE)?;
    let (top, bot) = root_area.split_vertically(640);

    let mut ctx = ChartBuilder::on(&top)
        .margin(16)
        .set_label_area_size(LabelAreaPosition::Left, 64)
        .set_label_area_size(LabelAreaPosition::Bottom, 48)
        .caption(format!("{} Potential", model.name()), ("sans-serif", 32))
        .build_cartesian_2d(window.r_lo()..window.r_hi(), window.v_lo()..window.v_hi())?;

    ctx.configure_mesh()
        .x_desc("Distance (Å)")
        .y_desc("Potential Energy (ε/kB, K)")
        .draw()?;

    ctx.draw_series(LineSeries::new(
        vec![(window.r_lo(), 0.0), (window.r_hi(), 0.0)],
        BLACK.mix(0.5).stroke_width(1),
    ))?;

    for run in curve.finite_runs() {
        ctx.draw_series(LineSeries::new(
            run.into_iter().map(|(r, v)| (r, window.clip(v))),
            color.stroke_width(3),
        ))?;
    }

    if model.has_hard_core() {
        // the core is drawn pinned to the top edge, joined to the finite branch at sigma
        let core: Vec<(f64, f64)> = curve.core_points().map(|r| (r, window.v_hi())).collect();
        if !core.is_empty() {
            ctx.draw_series(LineSeries::new(core, color.mix(0.5).stroke_width(2)))?
                .label("V = ∞")
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }
        let sigma = model.sigma();
        let v_edge = window.clip(model.evaluate_at(sigma));
        ctx.draw_series(LineSeries::new(
            vec![(sigma, v_edge), (sigma, window.v_hi())],
            color.stroke_width(2),
        ))?;
        ctx.configure_series_labels()
            .background_style(WHITE.mix(0.9))
            .border_style(BLACK)
            .draw()?;
    }

    if let PotentialModel::SquareWell(p) = model {
        let edge = p.well_edge();
        ctx.draw_series(LineSeries::new(
            vec![(edge, -p.epsilon_over_kb * p.well_depth), (edge, 0.0)],
            color.stroke_width(3),
        ))?;
    }

    let current = session.current_energy();
    if current.is_finite() && window.contains(session.distance, current) {
        ctx.draw_series(std::iter::once(Circle::new(
            (session.distance, current),
            6,
            MARKER_COLOR.filled(),
        )))?;
    } else {
        log::debug!(
            "Marker at r = {} (V = {}) is outside the plot window",
            session.distance,
            current
        );
    }

    bot.draw(&Text::new(
        model.equation(),
        (24, 16),
        ("sans-serif", 22).into_font(),
    ))?;

    root_area.present()?;
    Ok(())
}

// SolidSource is premultiplied; take straight alpha here so translucent fills stay in range
fn rgba_solid(r: u8, g: u8, b: u8, a: u8) -> Source<'static> {
    Source::Solid(SolidSource::from_unpremultiplied_argb(a, r, g, b))
}

fn rgba_white() -> Source<'static> {
    rgba_solid(0xff, 0xff, 0xff, 0xff)
}

fn scale_channel(c: u8, factor: f64) -> u8 {
    (c as f64 * factor).min(255.0) as u8
}

fn shade(rgb: (u8, u8, u8), factor: f64) -> Source<'static> {
    rgba_solid(
        scale_channel(rgb.0, factor),
        scale_channel(rgb.1, factor),
        scale_channel(rgb.2, factor),
        0xff,
    )
}

fn render_circle_at(x: f32, y: f32, radius: f32) -> Path {
    let mut pb = PathBuilder::new();
    pb.arc(x, y, radius, 0.0, 2.0 * PI);
    pb.close();
    pb.finish()
}

fn draw_white_background(dt: &mut DrawTarget) {
    let (w, h) = (dt.width() as f32, dt.height() as f32);
    let mut pb = PathBuilder::new();
    pb.rect(0.0, 0.0, w, h);
    let draw_path = pb.finish();
    dt.fill(&draw_path, &rgba_white(), &DrawOptions::new());
}

// shadow, body, darker rim, then a translucent highlight up and to the left
fn draw_sphere(dt: &mut DrawTarget, x: f32, y: f32, radius: f32, base: (u8, u8, u8)) {
    let draw_options = DrawOptions::new();

    let shadow_offset = radius * 0.1;
    let shadow = render_circle_at(x + shadow_offset, y + shadow_offset, radius);
    dt.fill(&shadow, &rgba_solid(0x33, 0x33, 0x33, 0xff), &draw_options);

    let body = render_circle_at(x, y, radius);
    dt.fill(&body, &shade(base, 1.0), &draw_options);
    let rim = StrokeStyle {
        width: 1.5,
        ..StrokeStyle::default()
    };
    dt.stroke(&body, &shade(base, 0.7), &rim, &draw_options);

    let glow_offset = radius * 0.1;
    let glow = render_circle_at(x - glow_offset, y - glow_offset, radius * 0.8);
    let lighter = (
        scale_channel(base.0, 1.3),
        scale_channel(base.1, 1.3),
        scale_channel(base.2, 1.3),
    );
    dt.fill(
        &glow,
        &rgba_solid(lighter.0, lighter.1, lighter.2, 0x80),
        &draw_options,
    );

    let highlight_offset = radius * 0.3;
    let highlight = render_circle_at(x - highlight_offset, y - highlight_offset, radius * 0.2);
    dt.fill(&highlight, &rgba_solid(0xff, 0xff, 0xff, 0xa0), &draw_options);
}

/// Two particles of diameter sigma at the session's separation
pub fn write_schematic_png(session: &Session, pathname: &str) -> anyhow::Result<()> {
    let (width, height) = (800.0_f64, 240.0_f64);
    let margin = 40.0;
    let usable_width = width - 2.0 * margin;
    let usable_height = height - 2.0 * margin;

    // 10 Angstrom spans 60% of the usable width
    let mut distance_scale = usable_width * 0.6 / 10.0;
    let mut radius = session.model.sigma() * distance_scale / 2.0;

    let max_radius = usable_height / 4.0;
    if radius > max_radius {
        distance_scale *= max_radius / radius;
        radius = max_radius;
    }

    let center_y = height / 2.0;
    let left_x = margin + usable_width * 0.2;
    // anything past the right edge is off-canvas anyway
    let right_x = (left_x + session.distance * distance_scale).min(width + radius);

    let mut dt = DrawTarget::new(width as i32, height as i32);
    draw_white_background(&mut dt);

    draw_sphere(
        &mut dt,
        left_x as f32,
        center_y as f32,
        radius as f32,
        (0x41, 0x69, 0xe1),
    );
    draw_sphere(
        &mut dt,
        right_x as f32,
        center_y as f32,
        radius as f32,
        (0xdc, 0x14, 0x3c),
    );

    // dashed separation line on top of the spheres
    let mut pb = PathBuilder::new();
    pb.move_to(left_x as f32, center_y as f32);
    pb.line_to(right_x as f32, center_y as f32);
    let line = pb.finish();
    let style = StrokeStyle {
        width: 1.5,
        dash_array: vec![4.0, 2.0],
        ..StrokeStyle::default()
    };
    dt.stroke(
        &line,
        &rgba_solid(0x66, 0x66, 0x66, 0xff),
        &style,
        &DrawOptions::new(),
    );

    for x in [left_x, right_x] {
        let dot = render_circle_at(x as f32, center_y as f32, 2.0);
        dt.fill(&dot, &rgba_solid(0, 0, 0, 0xff), &DrawOptions::new());
    }

    dt.write_png(pathname)
        .with_context(|| format!("could not write {pathname}"))?;
    Ok(())
}

#[derive(Serialize)]
struct CurveDump<'a> {
    model: &'static str,
    equation: String,
    distance: f64,
    // infinite energies become null
    energy: Option<f64>,
    r: &'a [f64],
    v: Vec<Option<f64>>,
}

fn finite_or_none(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

pub fn write_curve_json(session: &Session, pathname: &str) -> anyhow::Result<()> {
    let curve = session.curve();
    let dump = CurveDump {
        model: session.model.name(),
        equation: session.model.equation(),
        distance: session.distance,
        energy: finite_or_none(session.current_energy()),
        r: curve.r(),
        v: curve.v().iter().copied().map(finite_or_none).collect(),
    };
    let json = serde_json::to_string_pretty(&dump)?;
    fs::write(pathname, json).with_context(|| format!("could not write {pathname}"))?;
    Ok(())
}

pub fn write_session_toml(session: &Session, pathname: &str) -> anyhow::Result<()> {
    let toml = toml::to_string(session)?;
    fs::write(pathname, toml).with_context(|| format!("could not write {pathname}"))?;
    Ok(())
}

pub fn read_session_toml(pathname: &str) -> anyhow::Result<Session> {
    let contents =
        fs::read_to_string(pathname).with_context(|| format!("could not read {pathname}"))?;
    let session = toml::from_str(&contents)
        .with_context(|| format!("{pathname} is not a valid session file"))?;
    Ok(session)
}

fn try_delete(p: String) -> anyhow::Result<()> {
    if std::path::Path::new(&p).is_file() {
        fs::remove_file(&p).with_context(|| format!("could not remove {p}"))?;
    }
    Ok(())
}

pub fn clear_out_files(config: &VizConfig) -> anyhow::Result<()> {
    try_delete(config.toml())?;
    try_delete(config.potential())?;
    try_delete(config.schematic())?;
    try_delete(config.curve())?;
    Ok(())
}

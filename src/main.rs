// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use routevis::{
    animation::{Journey, JourneyEngine},
    config::Config,
    models::Route,
    services::{TileFetcher, TileSource},
    views::{InfoPanel, MarkerIcons, TileLayer, Viewport},
};

struct Model {
    // Core components:
    route: Route,
    journey: Journey,
    journey_engine: JourneyEngine,

    // Map components:
    viewport: Viewport,
    tile_layer: TileLayer,
    tile_fetcher: TileFetcher,
    marker_icons: MarkerIcons,
    info_panel: InfoPanel,

    // Rendering components:
    texture: wgpu::Texture,
    draw: nannou::Draw,
    draw_renderer: nannou::draw::Renderer,
    texture_reshaper: wgpu::TextureReshaper,

    // Style:
    map_background: Rgb,

    // FPS tracking:
    last_update: Instant,
    fps: f32,

    // Debug helper
    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Load the route
    let route = Route::load(config.resolve_route_path()).expect("Failed to load route file");

    // Create window
    let window_id = app
        .new_window()
        .title("routevis 0.1.2")
        .size(config.window.width, config.window.height)
        .msaa_samples(1)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();
    let window = app.window(window_id).unwrap();

    // Set up render texture
    let device = window.device();
    let draw = nannou::Draw::new();
    let texture = wgpu::TextureBuilder::new()
        .size([
            config.rendering.texture_width,
            config.rendering.texture_height,
        ])
        .usage(wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING)
        .sample_count(config.rendering.texture_samples)
        .format(wgpu::TextureFormat::Rgba16Float)
        .build(device);

    let draw_renderer = nannou::draw::RendererBuilder::new()
        .build_from_texture_descriptor(device, texture.descriptor());

    // Set up texture reshaper for window display
    let sample_count = window.msaa_samples();
    let texture_view = texture.view().build();
    let texture_sample_count = texture.sample_count();
    let texture_sample_type = texture.sample_type();
    let dst_format = Frame::TEXTURE_FORMAT;
    let texture_reshaper = wgpu::TextureReshaper::new(
        device,
        &texture_view,
        texture_sample_count,
        texture_sample_type,
        sample_count,
        dst_format,
    );

    // Camera fixed on the route start; the whole journey fits the frame
    let viewport = Viewport::new(
        route.start,
        config.map.zoom,
        config.rendering.texture_width as f32,
        config.rendering.texture_height as f32,
    );

    // Tile pipeline
    let tile_source = TileSource::new(&config.map.tile_url_template, &config.map.tile_subdomains)
        .expect("Invalid tile URL template");
    let tile_fetcher = TileFetcher::new(tile_source, config.resolve_tile_cache_dir());

    // Marker icons
    let marker_icons = MarkerIcons::load(app, &config.resolve_assets_dir(), &config.icons)
        .expect("Failed to load marker icons");

    // Journey animation
    let journey_engine = JourneyEngine::new(config.animation.clone());
    let journey = journey_engine.build_journey(&route);

    let style = &config.style;
    Model {
        route,
        journey,
        journey_engine,
        viewport,
        tile_layer: TileLayer::default(),
        tile_fetcher,
        marker_icons,
        info_panel: InfoPanel::new(style),
        texture,
        draw,
        draw_renderer,
        texture_reshaper,
        map_background: rgb(
            style.map_background[0],
            style.map_background[1],
            style.map_background[2],
        ),
        last_update: Instant::now(),
        fps: 0.0,
        debug_flag: false,
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    // FPS and timing
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    let dt = duration.as_secs_f32();
    if model.debug_flag {
        model.fps = 1.0 / dt;
    }

    /**************** Animation step ****************/
    if model.journey.update(dt) {
        model.journey.advance();
    }

    // Keep the tile layer fed
    model
        .tile_layer
        .update(app, &mut model.tile_fetcher, &model.viewport);

    /**************** Frame drawing *****************/
    let draw = &model.draw;
    draw.background().color(model.map_background);

    model.tile_layer.draw(draw, &model.viewport);

    model
        .marker_icons
        .draw_start(draw, model.viewport.project(model.route.start));
    model
        .marker_icons
        .draw_end(draw, model.viewport.project(model.route.end));
    model.marker_icons.draw_vehicle(
        draw,
        model.viewport.project(model.journey.position()),
        model.journey.heading() as f32,
    );

    model.info_panel.draw(
        draw,
        &model.route,
        model.texture.size()[0] as f32,
        model.texture.size()[1] as f32,
    );

    if model.debug_flag {
        draw_debug_overlay(model);
    }

    render_to_texture(app, model);
}

fn view(_app: &App, model: &Model, frame: Frame) {
    let mut encoder = frame.command_encoder();
    model
        .texture_reshaper
        .encode_render_pass(frame.texture_view(), &mut encoder);
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        // Restart the journey from the route start
        Key::Space => {
            model.journey = model.journey_engine.build_journey(&model.route);
        }

        // Debug overlay
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }

        Key::Q => {
            model.tile_fetcher.shutdown();
            app.quit();
        }

        _ => (),
    }
}

/**************** Debug overlay ****************/

fn draw_debug_overlay(model: &Model) {
    let draw = &model.draw;

    // Axes at the texture origin
    draw.line()
        .points(pt2(0.0, 0.0), pt2(50.0, 0.0))
        .color(RED)
        .stroke_weight(1.0);
    draw.line()
        .points(pt2(0.0, 0.0), pt2(0.0, 50.0))
        .color(BLUE)
        .stroke_weight(1.0);

    // The interpolated path
    let path: Vec<Point2> = model
        .journey
        .points()
        .iter()
        .map(|p| model.viewport.project(*p))
        .collect();
    draw.polyline().weight(2.0).points(path).color(RED);

    let traveled_km = model.route.start.distance_m(&model.journey.position()) / 1000.0;
    let status = format!(
        "FPS: {:.1}\nstep: {}/{}\ntraveled: {:.2} km\ntiles: {} loaded, {} requested",
        model.fps,
        model.journey.get_current_step(),
        model.journey.step_count(),
        traveled_km,
        model.tile_layer.loaded_count(),
        model.tile_layer.requested_count(),
    );

    let w = model.texture.size()[0] as f32;
    let h = model.texture.size()[1] as f32;
    draw.text(&status)
        .x_y(-w / 2.0 + 180.0, -h / 2.0 + 110.0)
        .w_h(320.0, 180.0)
        .left_justify()
        .color(RED);
}

/**************** Rendering ****************/

fn render_to_texture(app: &App, model: &mut Model) {
    let window = app.main_window();
    let device = window.device();
    let ce_desc = wgpu::CommandEncoderDescriptor {
        label: Some("Texture renderer"),
    };
    let mut encoder = device.create_command_encoder(&ce_desc);
    let texture_view = model.texture.view().build();

    model.draw_renderer.encode_render_pass(
        device,
        &mut encoder,
        &model.draw,
        1.0,
        model.texture.size(),
        &texture_view,
        None,
    );

    window.queue().submit(Some(encoder.finish()));
    device.poll(wgpu::Maintain::Wait);
}

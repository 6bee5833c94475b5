// SPDX-License-Identifier: MPL-2.0
use kiosk_status::barcode::ScannableCode;
use kiosk_status::config::{self, Config};
use kiosk_status::domain::fault::{Catalog, FaultRecord};
use kiosk_status::domain::monitor::{DisplayState, Monitor, SequenceSource, TransitionPolicy};
use kiosk_status::domain::sizing::{ContainerSize, QrSize, Sizing};
use kiosk_status::i18n::fluent::I18n;
use kiosk_status::ui::status::{CodeCache, StatusView};
use tempfile::tempdir;

fn decode(image: &image_rs::RgbaImage) -> Vec<String> {
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        image.width() as usize,
        image.height() as usize,
        |x, y| image.get_pixel(x as u32, y as u32)[0],
    );
    prepared
        .detect_grids()
        .into_iter()
        .filter_map(|grid| grid.decode().ok().map(|(_, content)| content))
        .collect()
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn monitor_settings_round_trip_through_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.monitor.tick_interval_secs = Some(0);
    config.monitor.fault_probability = Some(1.5);
    config.monitor.seed = Some(1234);
    config::save_to_path(&config, &path).expect("save");

    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded.monitor.seed, Some(1234));
    assert_eq!(loaded.monitor.tick_interval().as_secs(), 1);
    assert_eq!(loaded.monitor.transition_policy().fault_probability(), 1.0);
}

#[test]
fn scripted_ticks_drive_the_status_view() {
    let catalog = Catalog::builtin();
    let first = catalog.records()[0].clone();
    let mut monitor = Monitor::new(catalog, TransitionPolicy::default());
    let mut draws = SequenceSource::new(vec![0.9, 0.1, 0.0, 0.95]).expect("draws");

    let i18n = I18n::new(Some("en-US".into()), &Config::default());
    let mut sizing = Sizing::default();
    sizing.measure(ContainerSize::new(400.0, 300.0));
    let mut cache = CodeCache::default();

    let mut seen = Vec::new();
    for _ in 0..3 {
        monitor.tick(&mut draws);
        cache
            .sync(
                monitor.current_fault().map(|fault| fault.url.as_str()),
                sizing.qr_size(),
            )
            .expect("encode");
        let view = StatusView::build(&i18n, monitor.current_fault(), sizing.qr_size(), &cache);
        seen.push((monitor.state(), view.headline().to_string(), view.code().is_some()));
    }

    assert_eq!(seen[0].0, DisplayState::Ready);
    assert!(!seen[0].2);
    assert_eq!(seen[1].0, DisplayState::Fault { index: 0 });
    assert_eq!(seen[1].1, format!("System Error {}", first.code));
    assert!(seen[1].2);
    assert_eq!(seen[2].0, DisplayState::Ready);
    assert!(!seen[2].2);
}

#[test]
fn single_fault_catalog_scenario() {
    let record = FaultRecord::new("120", "Upgrade Failure", "https://example.com/kb/120");
    let catalog = Catalog::new(vec![record.clone()]).expect("catalog");
    let mut monitor = Monitor::new(catalog, TransitionPolicy::default());
    monitor.tick(&mut SequenceSource::new(vec![0.1, 0.5]).expect("draws"));
    assert_eq!(monitor.current_fault(), Some(&record));

    let size = QrSize::from_container(ContainerSize::new(400.0, 300.0)).expect("measured");
    assert_eq!(size.value(), 120);

    let code = ScannableCode::encode(&record.url).expect("encode");
    let raster = code.rasterize(size);
    assert!(raster.width() >= 120);
    assert_eq!(decode(&raster), vec![record.url]);
}

#[test]
fn builtin_urls_decode_at_smallest_code_size() {
    let size = QrSize::from_container(ContainerSize::new(100.0, 100.0)).expect("measured");
    assert_eq!(size.value(), 80);

    for record in Catalog::builtin().records() {
        let code = ScannableCode::encode(&record.url).expect("encode");
        assert_eq!(decode(&code.rasterize(size)), vec![record.url.clone()]);
    }
}

#[test]
fn builtin_codes_are_kept_verbatim() {
    let catalog = Catalog::builtin();
    let codes: Vec<&str> = catalog
        .iter()
        .map(|record| record.code.as_str())
        .collect();
    assert_eq!(codes, ["120", "051", "43"]);
}

#![cfg_attr(
    all(target_os = "windows", not(debug_assertions),),
    windows_subsystem = "windows"
)]
use dioxus::desktop::{Config as DioxusConfig, LogicalSize, WindowBuilder};
use dioxus::prelude::LaunchBuilder;
use log::{debug, error, info, warn};
use platform_info::{PlatformInfo, PlatformInfoAPI, UNameAPI};
use simplelog::{
    ColorChoice, CombinedLogger, Config as LogConfig, LevelFilter, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::{self, File};
use std::{backtrace::Backtrace, panic};

use query_builder_playground::query_builder::{
    default_schema, load_query, load_schema, AvailableMembers, QueryFilters,
};
use query_builder_playground::{app, app_dir, AppProps, Config};

fn load_available_members(config: &Config) -> AvailableMembers {
    if let Some(path) = &config.schema_path {
        match load_schema(path) {
            Ok(schema) => return schema,
            Err(e) => warn!("Falling back to the bundled schema: {}", e),
        }
    }
    default_schema().expect("Bundled schema is invalid!")
}

fn load_filters(config: &Config, available_members: &AvailableMembers) -> QueryFilters {
    let Some(path) = &config.query_path else {
        return QueryFilters::default();
    };
    match load_query(path) {
        Ok(query) => QueryFilters::from_query(&query, available_members),
        Err(e) => {
            warn!("Starting with an empty query: {}", e);
            QueryFilters::default()
        }
    }
}

fn main() {
    let app_dir = app_dir().expect("Could not determine the app data directory!");
    fs::create_dir_all(&app_dir).expect("Failed to create config dir!");
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Debug,
            simplelog::ConfigBuilder::new().add_filter_ignore_str("tao").build(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            LevelFilter::Info,
            LogConfig::default(),
            File::create(app_dir.join("playground.log")).expect("Failed to create log file!"),
        ),
    ])
    .expect("Failed to initialise logging!");
    panic::set_hook(Box::new(|info| {
        let payload = if let Some(string) = info.payload().downcast_ref::<String>() {
            string.to_string()
        } else if let Some(str) = info.payload().downcast_ref::<&'static str>() {
            str.to_string()
        } else {
            format!("{:?}", info.payload())
        };
        let backtrace = Backtrace::force_capture();
        error!("The playground panicked! This is a bug.\n{info:#?}\nPayload: {payload}\nBacktrace: {backtrace}");
    }));

    info!("Playground version: {}", env!("CARGO_PKG_VERSION"));
    match PlatformInfo::new() {
        Ok(platform_info) => debug!(
            "System information:\n\tSysname: {}\n\tRelease: {}\n\tMachine: {}",
            platform_info.sysname().to_string_lossy(),
            platform_info.release().to_string_lossy(),
            platform_info.machine().to_string_lossy()
        ),
        Err(e) => warn!("Unable to determine platform info: {}", e),
    }

    let config_path = app_dir.join("config.json");
    let config = Config::load_or_create(&config_path).expect("Failed to load config!");
    info!("Running playground with config: {config:#?}");

    let available_members = load_available_members(&config);
    let filters = load_filters(&config, &available_members);
    debug!("Starting with {} filters", filters.filters().len());

    LaunchBuilder::desktop()
        .with_cfg(
            DioxusConfig::new()
                .with_window(
                    WindowBuilder::new()
                        .with_resizable(true)
                        .with_title("Query Builder Playground")
                        .with_inner_size(LogicalSize::new(1100, 640))
                        .with_min_inner_size(LogicalSize::new(720, 400)),
                )
                .with_menu(None),
        )
        .with_context(AppProps {
            config,
            available_members,
            filters,
        })
        .launch(app);
}

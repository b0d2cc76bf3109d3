use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use humantime::format_duration;
use serde::Serialize;
use std::{
    sync::{atomic::{AtomicI64, Ordering}, RwLock},
    time::Duration,
};
use sysinfo::System;

use crate::{constants::START_TIME, AppState};

const CACHE_SECS: i64 = 5;

#[derive(Serialize, Clone, Default)]
struct SystemInfo {
    os: String,
    hostname: String,
    cpu_count: usize,
    memory_total: String,
}

#[derive(Serialize, Clone, Default)]
pub struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    version: String,
    content_store: String,
    projects: usize,
    memory_usage: String,
    system: SystemInfo,
}

/// Last health report, reused for `CACHE_SECS`.
#[derive(Default)]
pub struct HealthCache {
    last_check: AtomicI64,
    status: RwLock<HealthCheckResponse>,
}

fn build_health_response(state: &AppState) -> HealthCheckResponse {
    let now_utc = Utc::now();
    let uptime_secs = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;

    let mut sys = System::new_all();
    sys.refresh_all();

    let system_info = SystemInfo {
        os: System::name().unwrap_or_else(|| "Unknown".to_string()),
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        cpu_count: sys.cpus().len(),
        memory_total: format!("{:.2} GB", sys.total_memory() as f64 / 1024.0 / 1024.0 / 1024.0),
    };

    let memory_usage = sysinfo::get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or("Unknown".to_string(), |p| {
            format!("{:.2} MB", p.memory() as f64 / 1024.0 / 1024.0)
        });

    // Configuration only; the store itself is not probed.
    let content_store = if state.content_store_configured { "configured" } else { "disabled" };

    HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        content_store: content_store.to_string(),
        projects: state.project_handler.project_repo.len(),
        memory_usage,
        system: system_info,
    }
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let cache = &state.health_cache;
    let now = Utc::now().timestamp();
    let last = cache.last_check.load(Ordering::Relaxed);

    if now - last > CACHE_SECS {
        let response = build_health_response(&state);

        if let Ok(mut cached) = cache.status.write() {
            *cached = response.clone();
            cache.last_check.store(now, Ordering::Relaxed);
        }

        return HttpResponse::Ok().json(response);
    }

    match cache.status.read() {
        Ok(response) => HttpResponse::Ok().json(response.clone()),
        Err(e) => {
            tracing::warn!("Health check cache lock poisoned: {}", e);
            HttpResponse::Ok().json(build_health_response(&state))
        }
    }
}

//! Concise text renderings of tool results, used when the server runs with
//! `response_format = text`.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate};

use super::types::{
    AddMovieResult, AddSeriesResult, CollectionsResult, CommandResult, DiskSpaceResult,
    EpisodeCalendarResult, EpisodeListResult, HistoryResult, ManualImportResult,
    MovieCalendarResult, MovieDetailsResult, MovieListResult, MovieSearchResult, QueueResult,
    RemoveFromQueueResult, SeriesDetailsResult, SeriesListResult, SeriesSearchResult,
    SystemStatusResult, WantedItem, WantedResult, WantedResultKind,
};

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Human-readable rendering of a tool result.
pub trait Render {
    fn render(&self) -> String;
}

fn year(year: Option<i32>) -> String {
    year.map_or_else(|| "?".to_string(), |y| y.to_string())
}

fn id(id: Option<i64>) -> String {
    id.map_or_else(|| "?".to_string(), |i| i.to_string())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn more_line(out: &mut String, total: usize, shown: usize) {
    if total > shown {
        let _ = writeln!(out, "  ... {} more", total - shown);
    }
}

/// Format an API date as `January 05, 2024`; unparseable input is kept as is.
pub fn format_date(value: Option<&str>) -> String {
    let Some(value) = value else {
        return "TBA".to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%B %d, %Y").to_string();
    }
    match NaiveDate::parse_from_str(value.get(..10).unwrap_or(value), "%Y-%m-%d") {
        Ok(date) => date.format("%B %d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

fn episode_code(season: Option<i32>, episode: Option<i32>) -> String {
    format!(
        "S{:02}E{:02}",
        season.unwrap_or_default(),
        episode.unwrap_or_default()
    )
}

fn gb(bytes: i64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

impl Render for MovieListResult {
    fn render(&self) -> String {
        if self.count == 0 {
            return "No movies found.".to_string();
        }
        let mut out = format!("{} movies:\n", self.count);
        for m in &self.movies {
            let _ = writeln!(
                out,
                "  [{}] {} ({}) - TMDB: {}",
                id(m.id),
                m.title,
                year(m.year),
                id(m.tmdb_id)
            );
        }
        more_line(&mut out, self.count, self.movies.len());
        out.trim_end().to_string()
    }
}

impl Render for SeriesListResult {
    fn render(&self) -> String {
        if self.count == 0 {
            return "No series found.".to_string();
        }
        let mut out = format!("{} series:\n", self.count);
        for s in &self.series {
            let _ = writeln!(
                out,
                "  [{}] {} ({}) - {}/{} episodes",
                id(s.id),
                s.title,
                year(s.year),
                s.episode_file_count,
                s.episode_count
            );
        }
        more_line(&mut out, self.count, self.series.len());
        out.trim_end().to_string()
    }
}

impl Render for MovieSearchResult {
    fn render(&self) -> String {
        if self.count == 0 {
            return "No movies found in search.".to_string();
        }
        let mut out = format!("Found {} movies in search:\n", self.count);
        for m in &self.movies {
            let _ = writeln!(
                out,
                "  {} ({}) - TMDB: {}",
                m.title,
                year(m.year),
                id(m.tmdb_id)
            );
        }
        more_line(&mut out, self.count, self.movies.len());
        out.trim_end().to_string()
    }
}

impl Render for SeriesSearchResult {
    fn render(&self) -> String {
        if self.count == 0 {
            return "No series found in search.".to_string();
        }
        let mut out = format!("Found {} series in search:\n", self.count);
        for s in &self.series {
            let _ = writeln!(
                out,
                "  {} ({}) - TVDB: {}",
                s.title,
                year(s.year),
                id(s.tvdb_id)
            );
        }
        more_line(&mut out, self.count, self.series.len());
        out.trim_end().to_string()
    }
}

impl Render for MovieDetailsResult {
    fn render(&self) -> String {
        let m = &self.movie;
        let mut out = format!("**{} ({})**\n", m.title, year(m.year));
        let _ = writeln!(out, "Status: {}", m.status.as_deref().unwrap_or("unknown"));
        let _ = writeln!(out, "Monitored: {}", yes_no(m.monitored));
        let _ = writeln!(out, "Downloaded: {}", yes_no(m.has_file));
        if let Some(runtime) = m.runtime.filter(|r| *r > 0) {
            let _ = writeln!(out, "Runtime: {} min", runtime);
        }
        if !m.genres.is_empty() {
            let _ = writeln!(out, "Genres: {}", m.genres.join(", "));
        }
        if !m.overview.is_empty() {
            let _ = writeln!(out, "\n{}", m.overview);
        }
        out.trim_end().to_string()
    }
}

impl Render for SeriesDetailsResult {
    fn render(&self) -> String {
        let s = &self.series;
        let mut out = format!("**{} ({})**\n", s.title, year(s.year));
        let _ = writeln!(out, "Status: {}", s.status.as_deref().unwrap_or("unknown"));
        let _ = writeln!(out, "Monitored: {}", yes_no(s.monitored));
        if let Some(network) = &s.network {
            let _ = writeln!(out, "Network: {}", network);
        }
        let _ = writeln!(out, "Seasons: {}", s.season_count);
        let _ = writeln!(
            out,
            "Episodes: {}/{} downloaded",
            s.episode_file_count, s.episode_count
        );
        if !s.overview.is_empty() {
            let _ = writeln!(out, "\n{}", s.overview);
        }
        out.trim_end().to_string()
    }
}

impl Render for EpisodeListResult {
    fn render(&self) -> String {
        if self.count == 0 {
            return "No episodes found.".to_string();
        }
        let mut out = format!("{} episodes:\n", self.count);
        for e in &self.episodes {
            let downloaded = if e.has_file { "Downloaded" } else { "Missing" };
            let monitored = if e.monitored { "Monitored" } else { "Unmonitored" };
            let _ = writeln!(
                out,
                "  {}: {} ({}) - {}, {}",
                episode_code(e.season_number, e.episode_number),
                e.title.as_deref().unwrap_or("TBA"),
                format_date(e.air_date.as_deref()),
                downloaded,
                monitored
            );
        }
        out.trim_end().to_string()
    }
}

impl Render for AddMovieResult {
    fn render(&self) -> String {
        self.message.clone()
    }
}

impl Render for AddSeriesResult {
    fn render(&self) -> String {
        self.message.clone()
    }
}

impl Render for RemoveFromQueueResult {
    fn render(&self) -> String {
        self.message.clone()
    }
}

impl Render for CommandResult {
    fn render(&self) -> String {
        self.message.clone()
    }
}

impl Render for QueueResult {
    fn render(&self) -> String {
        if self.queues.values().all(|q| q.items.is_empty()) {
            return "Download queue is empty.".to_string();
        }
        let mut out = String::from("Download Queue:\n");
        for (service, queue) in &self.queues {
            if queue.items.is_empty() {
                let _ = writeln!(out, "\n{}: Empty", service.to_uppercase());
                continue;
            }
            let _ = writeln!(
                out,
                "\n{} ({} items):",
                service.to_uppercase(),
                queue.count
            );
            for item in &queue.items {
                match item.progress {
                    Some(progress) => {
                        let _ = writeln!(
                            out,
                            "  {} - {} ({:.1}%)",
                            item.title, item.status, progress
                        );
                    }
                    None => {
                        let _ = writeln!(out, "  {} - {}", item.title, item.status);
                    }
                }
            }
        }
        out.trim_end().to_string()
    }
}

impl Render for HistoryResult {
    fn render(&self) -> String {
        if self.records.is_empty() {
            return "No history records found.".to_string();
        }
        let mut out = format!(
            "History (page {}, {} total records):\n",
            self.page, self.total_records
        );
        for r in &self.records {
            let _ = writeln!(
                out,
                "  {} - {} ({})",
                r.event_type.as_deref().unwrap_or("unknown"),
                r.source_title.as_deref().unwrap_or("Unknown"),
                format_date(r.date.as_deref())
            );
        }
        out.trim_end().to_string()
    }
}

impl Render for ManualImportResult {
    fn render(&self) -> String {
        if self.count == 0 {
            return "No importable files found.".to_string();
        }
        let mut out = format!("Found {} importable files:\n", self.count);
        for item in &self.items {
            let name = item
                .relative_path
                .as_deref()
                .or(item.name.as_deref())
                .or(item.path.as_deref())
                .unwrap_or("Unknown");
            if item.rejections.is_empty() {
                let _ = writeln!(out, "  {}", name);
            } else {
                let _ = writeln!(out, "  {} ({} rejections)", name, item.rejections.len());
            }
        }
        more_line(&mut out, self.count, self.items.len());
        out.trim_end().to_string()
    }
}

impl Render for MovieCalendarResult {
    fn render(&self) -> String {
        if self.count == 0 {
            return "No upcoming movies.".to_string();
        }
        let mut out = format!("Upcoming movies ({}):\n", self.count);
        for m in &self.movies {
            let date = m
                .digital_release
                .as_deref()
                .or(m.physical_release.as_deref())
                .or(m.in_cinemas.as_deref())
                .or(m.release_date.as_deref());
            let _ = writeln!(out, "  {} - {}", m.title, format_date(date));
        }
        out.trim_end().to_string()
    }
}

impl Render for EpisodeCalendarResult {
    fn render(&self) -> String {
        if self.count == 0 {
            return "No upcoming episodes.".to_string();
        }
        let mut out = format!("Upcoming episodes ({}):\n", self.count);
        for e in &self.episodes {
            let series = match &e.series.title {
                Some(title) => title.clone(),
                None => format!("Series ID {}", id(e.series_id)),
            };
            let _ = writeln!(
                out,
                "  {} {} - {} ({})",
                series,
                episode_code(e.season_number, e.episode_number),
                e.title.as_deref().unwrap_or("TBA"),
                format_date(e.air_date_utc.as_deref().or(e.air_date.as_deref()))
            );
        }
        out.trim_end().to_string()
    }
}

impl Render for WantedResult {
    fn render(&self) -> String {
        let label = match self.kind {
            WantedResultKind::Missing => "missing",
            WantedResultKind::CutoffUnmet => "cutoff unmet",
        };
        if self.records.is_empty() {
            return format!("No {} items found.", label);
        }
        let mut out = format!(
            "Found {} {} items (page {}):\n",
            self.total_records, label, self.page
        );
        for record in &self.records {
            match record {
                WantedItem::Movie(m) => {
                    let _ = writeln!(out, "  {} ({})", m.title, year(m.year));
                }
                WantedItem::Episode(e) => {
                    let _ = writeln!(
                        out,
                        "  {} {} - {}",
                        e.series.title.as_deref().unwrap_or("Unknown series"),
                        episode_code(e.season_number, e.episode_number),
                        e.title.as_deref().unwrap_or("TBA")
                    );
                }
            }
        }
        out.trim_end().to_string()
    }
}

impl Render for SystemStatusResult {
    fn render(&self) -> String {
        let mut out = String::from("System Status:\n");
        for (service, status) in &self.status {
            let _ = writeln!(
                out,
                "\n{}: v{}",
                service.to_uppercase(),
                status.version.as_deref().unwrap_or("unknown")
            );
            if status.health.is_empty() {
                let _ = writeln!(out, "  All systems healthy");
                continue;
            }
            for check in &status.health {
                let marker = match check.kind.as_deref() {
                    Some("error") => "ERROR",
                    Some("warning") => "WARNING",
                    Some("notice") => "NOTICE",
                    _ => "INFO",
                };
                let _ = writeln!(
                    out,
                    "  {}: {}",
                    marker,
                    check.message.as_deref().unwrap_or_default()
                );
            }
        }
        out.trim_end().to_string()
    }
}

impl Render for DiskSpaceResult {
    fn render(&self) -> String {
        let mut out = String::from("Disk Space:\n");
        for (service, disks) in &self.disk_space {
            let _ = writeln!(out, "\n{}:", service.to_uppercase());
            if disks.is_empty() {
                let _ = writeln!(out, "  No disks reported");
            }
            for disk in disks {
                let _ = writeln!(
                    out,
                    "  {}: {:.1} GB free of {:.1} GB ({:.1}% used)",
                    disk.path.as_deref().or(disk.label.as_deref()).unwrap_or("?"),
                    gb(disk.free_space),
                    gb(disk.total_space),
                    disk.percent_used
                );
            }
        }
        out.trim_end().to_string()
    }
}

impl Render for CollectionsResult {
    fn render(&self) -> String {
        if self.count == 0 {
            return "No collections found.".to_string();
        }
        let mut out = format!("{} collections:\n", self.count);
        for c in &self.collections {
            let _ = writeln!(
                out,
                "  {} - {} movies{}",
                c.title,
                c.movies.len(),
                if c.monitored { ", monitored" } else { "" }
            );
        }
        out.trim_end().to_string()
    }
}

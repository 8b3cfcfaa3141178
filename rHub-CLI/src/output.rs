//! Output formatting.

use chrono::NaiveDateTime;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use rhub::models::*;
use rhub::{ApiResponse, Notifier};
use rust_i18n::t;
use serde::Serialize;
use serde_json::Value;

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table format
    Table,
    /// JSON format
    Json,
    /// Plain text format
    #[default]
    Plain,
}

/// Trait for plain text output.
pub trait PlainPrint {
    /// Print as plain text with formatting.
    fn plain_print(&self);
}

/// Trait for table row generation.
pub trait TableRow {
    /// Get table headers.
    fn headers() -> Vec<&'static str>;
    /// Get row data as strings.
    fn row(&self) -> Vec<String>;
}

/// Prints failure notifications to stderr.
#[derive(Debug, Default)]
pub struct CliNotifier;

impl Notifier for CliNotifier {
    fn notify_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }
}

/// Print items in plain text format.
pub fn print_plain<T: PlainPrint>(items: &[T]) {
    if items.is_empty() {
        println!("{}", t!("no_results"));
        return;
    }
    for item in items {
        item.plain_print();
    }
}

/// Format a server timestamp (`2024-05-01T10:00:00` or `2024-05-01 10:00:00`).
pub fn format_time(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Shorten text to `max` characters for one-line display.
pub fn preview(text: &str, max: usize) -> String {
    let flat: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let cut: String = flat.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}

/// Print a table of items with proper formatting for each output mode.
pub fn print_table<T: TableRow + Serialize + PlainPrint>(items: Vec<T>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items).unwrap_or_default());
        }
        OutputFormat::Table => {
            if items.is_empty() {
                println!("{}", t!("no_results"));
                return;
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(T::headers());
            for item in &items {
                table.add_row(item.row());
            }
            println!("{table}");
        }
        OutputFormat::Plain => {
            print_plain(&items);
        }
    }
}

/// Print a page of records followed by the page position.
pub fn print_page<T, R>(page: &PageResult<T>, current: u32, page_size: u32, format: OutputFormat)
where
    R: TableRow + Serialize + PlainPrint + for<'a> From<&'a T>,
{
    let rows: Vec<R> = page.records.iter().map(R::from).collect();
    print_table(rows, format);

    if matches!(format, OutputFormat::Plain | OutputFormat::Table) && page.total > 0 {
        println!(
            "{}",
            t!(
                "page_info",
                page = current,
                pages = page.total_pages(page_size),
                total = page.total
            )
            .to_string()
            .dimmed()
        );
    }
}

/// Print the outcome of a write operation.
pub fn print_ack(response: &ApiResponse<Value>, format: OutputFormat) {
    let data = response.data();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
        }
        OutputFormat::Table | OutputFormat::Plain => {
            let msg = response.msg().filter(|m| !m.is_empty()).unwrap_or("OK");
            println!("{} {}", "✓".green().bold(), msg);
            match data {
                Value::Null => {}
                Value::String(s) => println!("   {}", s),
                other => println!("   {}", other),
            }
        }
    }
}

// ============================================================================
// Display implementations for models
// ============================================================================

/// Row for post display.
#[derive(Serialize)]
pub struct PostRow {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub content: String,
    pub thumbs: i64,
    pub comments: i64,
    pub favorites: i64,
    pub time: String,
    pub urls: Vec<String>,
}

impl From<&PostVo> for PostRow {
    fn from(p: &PostVo) -> Self {
        Self {
            id: p.id.to_string(),
            title: p.title.clone(),
            publisher: p.publisher_name.clone(),
            content: p.content.clone(),
            thumbs: p.thumb_number,
            comments: p.comment_number,
            favorites: p.favorite_number,
            time: format_time(&p.create_time),
            urls: p.url_list().into_iter().map(str::to_owned).collect(),
        }
    }
}

impl TableRow for PostRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Title", "Publisher", "Content", "👍", "💬", "★", "Time"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.publisher.clone(),
            preview(&self.content, 40),
            self.thumbs.to_string(),
            self.comments.to_string(),
            self.favorites.to_string(),
            self.time.clone(),
        ]
    }
}

impl PlainPrint for PostRow {
    fn plain_print(&self) {
        println!(
            "{} {}",
            format!("[Post {}]", self.id).cyan(),
            self.title.bold()
        );
        println!(
            "   {} | {}",
            t!("by_user", name = self.publisher.green()),
            self.time.dimmed()
        );
        for line in self.content.lines().filter(|l| !l.trim().is_empty()) {
            println!("   {}", line);
        }
        for url in &self.urls {
            println!("   {}", url.dimmed());
        }
        println!(
            "   {}",
            t!(
                "post_stats",
                thumbs = self.thumbs,
                comments = self.comments,
                favorites = self.favorites
            )
            .to_string()
            .dimmed()
        );
        println!();
    }
}

/// Row for shop display.
#[derive(Serialize)]
pub struct ShopRow {
    pub id: String,
    pub name: String,
    pub address: String,
    pub hours: String,
    pub fans: i64,
    pub thumbs: i64,
    pub comments: i64,
}

impl From<&ShopVo> for ShopRow {
    fn from(s: &ShopVo) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name.clone(),
            address: s.address.clone(),
            hours: format!("{}-{}", s.begin_time, s.end_time),
            fans: s.fans_number,
            thumbs: s.thumb_number,
            comments: s.comment_number,
        }
    }
}

impl TableRow for ShopRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Address", "Hours", "Fans", "👍", "💬"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.address.clone(),
            self.hours.clone(),
            self.fans.to_string(),
            self.thumbs.to_string(),
            self.comments.to_string(),
        ]
    }
}

impl PlainPrint for ShopRow {
    fn plain_print(&self) {
        println!("[{}] {}", self.id.cyan(), self.name.bold());
        if !self.address.is_empty() {
            println!("   {}", self.address.dimmed());
        }
        println!(
            "   {} | {}",
            self.hours,
            t!("shop_stats", fans = self.fans, thumbs = self.thumbs, comments = self.comments)
                .to_string()
                .dimmed()
        );
    }
}

/// Row for coupon display.
#[derive(Serialize)]
pub struct CouponRow {
    pub id: String,
    pub shop_id: String,
    pub name: String,
    pub description: String,
    pub stock: i64,
    pub deal: String,
    pub valid: String,
}

impl From<&CouponVo> for CouponRow {
    fn from(c: &CouponVo) -> Self {
        let deal = if c.reduce_amount > 0.0 {
            format!("{} - {}", c.full_amount, c.reduce_amount)
        } else {
            format!("x{}", c.discount_rate)
        };
        Self {
            id: c.id.to_string(),
            shop_id: c.shop_id.to_string(),
            name: c.name.clone(),
            description: c.description.clone(),
            stock: c.stock,
            deal,
            valid: format!("{} ~ {}", format_time(&c.begin_time), format_time(&c.end_time)),
        }
    }
}

impl TableRow for CouponRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Deal", "Stock", "Valid"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.deal.clone(),
            self.stock.to_string(),
            self.valid.clone(),
        ]
    }
}

impl PlainPrint for CouponRow {
    fn plain_print(&self) {
        println!(
            "{} {} {}",
            format!("[Coupon {}]", self.id).cyan(),
            self.name.bold(),
            self.deal.yellow()
        );
        if !self.description.is_empty() {
            println!("   {}", self.description);
        }
        println!(
            "   {} | {}",
            t!("stock_label", stock = self.stock),
            self.valid.dimmed()
        );
    }
}

/// Row for comment display.
#[derive(Serialize)]
pub struct CommentRow {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub content: String,
    pub thumbs: i64,
    pub time: String,
}

impl From<&CommentVo> for CommentRow {
    fn from(c: &CommentVo) -> Self {
        Self {
            id: c.id.to_string(),
            user_id: c.user_id.to_string(),
            username: c.username.clone(),
            content: c.content.clone(),
            thumbs: c.thumb_number,
            time: format_time(&c.create_time),
        }
    }
}

impl TableRow for CommentRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "User", "Content", "👍", "Time"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.username.clone(),
            preview(&self.content, 60),
            self.thumbs.to_string(),
            self.time.clone(),
        ]
    }
}

impl PlainPrint for CommentRow {
    fn plain_print(&self) {
        println!(
            "{} {} {} {}",
            format!("#{}", self.id).yellow(),
            self.username.green(),
            format!("[UID: {}]", self.user_id).dimmed(),
            self.time.dimmed()
        );
        for line in self.content.lines().filter(|l| !l.trim().is_empty()) {
            println!("     {}", line);
        }
    }
}

/// Row for follow display.
#[derive(Serialize)]
pub struct FollowRow {
    pub id: String,
    pub kind: i32,
    pub target_id: i64,
    pub target_name: String,
    pub time: String,
}

impl From<&FollowVo> for FollowRow {
    fn from(f: &FollowVo) -> Self {
        Self {
            id: f.id.to_string(),
            kind: f.kind,
            target_id: f.target_id,
            target_name: f.target_name.clone(),
            time: format_time(&f.create_time),
        }
    }
}

impl TableRow for FollowRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Type", "Target", "Name", "Since"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.kind.to_string(),
            self.target_id.to_string(),
            self.target_name.clone(),
            self.time.clone(),
        ]
    }
}

impl PlainPrint for FollowRow {
    fn plain_print(&self) {
        println!(
            "{} {} {}",
            self.target_name.bold(),
            format!("[{}:{}]", self.kind, self.target_id).dimmed(),
            self.time.dimmed()
        );
    }
}

/// Row for thumb display.
#[derive(Serialize)]
pub struct ThumbRow {
    pub id: String,
    pub kind: i32,
    pub target_id: i64,
    pub content: String,
    pub time: String,
}

impl From<&ThumbVo> for ThumbRow {
    fn from(t: &ThumbVo) -> Self {
        Self {
            id: t.id.to_string(),
            kind: t.kind,
            target_id: t.target_id,
            content: t.content.clone(),
            time: format_time(&t.create_time),
        }
    }
}

impl TableRow for ThumbRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Type", "Target", "Content", "Time"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.kind.to_string(),
            self.target_id.to_string(),
            preview(&self.content, 40),
            self.time.clone(),
        ]
    }
}

impl PlainPrint for ThumbRow {
    fn plain_print(&self) {
        println!(
            "{} {} {}",
            "👍".yellow(),
            format!("[{}:{}]", self.kind, self.target_id).cyan(),
            self.time.dimmed()
        );
        if !self.content.is_empty() {
            println!("   {}", preview(&self.content, 80));
        }
    }
}

/// Row for order display.
#[derive(Serialize)]
pub struct OrderRow {
    pub id: String,
    pub coupon_id: String,
    pub status: i32,
    pub time: String,
}

impl From<&OrderVo> for OrderRow {
    fn from(o: &OrderVo) -> Self {
        Self {
            id: o.id.to_string(),
            coupon_id: o.coupon_id.to_string(),
            status: o.status,
            time: format_time(&o.create_time),
        }
    }
}

impl TableRow for OrderRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Coupon", "Status", "Created"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.coupon_id.clone(),
            self.status.to_string(),
            self.time.clone(),
        ]
    }
}

impl PlainPrint for OrderRow {
    fn plain_print(&self) {
        println!(
            "{} {} | {}",
            format!("[Order {}]", self.id).cyan(),
            t!("coupon_label", id = &self.coupon_id),
            t!("status_label", status = self.status)
        );
        println!("   {}", self.time.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2024-05-01T10:20:30"), "2024-05-01 10:20");
        assert_eq!(format_time("2024-05-01 10:20:30"), "2024-05-01 10:20");
        assert_eq!(format_time(""), "-");
        assert_eq!(format_time("yesterday"), "yesterday");
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("a  b\nc", 10), "a b c");
        assert_eq!(preview("abcdefghijk", 5), "abcd…");
    }
}

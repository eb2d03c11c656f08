use clap::{Parser, Subcommand};
use colored::Colorize;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use thiserror::Error;

/// getui - Local registry for pre-rendered UI blocks and uikit partials
#[derive(Parser)]
#[command(name = "getui")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Registry directory (defaults to ~/.getui)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the local registry from a generated source directory
    Init {
        /// Path to a run directory containing overview.json and 1-data/
        #[arg(short, long)]
        source: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse and filter registered components
    Search {
        /// Filter by component type (blocks, uikit)
        #[arg(long = "type")]
        kind: Option<String>,

        /// Filter by category
        #[arg(long)]
        category: Option<String>,

        /// Filter by section
        #[arg(long)]
        section: Option<String>,

        /// Filter by component group
        #[arg(long)]
        page: Option<String>,

        /// Free-text search across name, slug, id
        #[arg(short, long)]
        query: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Retrieve component code by id or content hash
    Get {
        /// Component id, or a 32-char lowercase hex content hash
        value: String,

        /// Scope selecting the render mode (e.g. public, app, admin)
        #[arg(long)]
        scope: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

// Registry structures

#[derive(Serialize, Deserialize, Debug, Clone)]
struct Component {
    #[serde(rename = "type")]
    kind: String,
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    category: String,
    section: String,
    page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    library: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assets: Option<Value>,
}

impl Component {
    /// Copy with internal-only fields stripped, for listing output.
    fn cleaned(&self) -> Component {
        let mut clean = self.clone();
        clean.filename = None;
        clean
    }
}

#[derive(Deserialize, Debug)]
struct Overview {
    #[serde(default)]
    components: Vec<Component>,
    timestamp: Option<String>,
    total: Option<u64>,
}

#[derive(Deserialize, Debug)]
struct ComponentFile {
    code: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug)]
struct GlobalConfig {
    active: ActiveSources,
    scopes: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug)]
struct ActiveSources {
    blocks: Option<String>,
    uikit: Option<Map<String, Value>>,
}

#[derive(Serialize, Deserialize, Debug)]
struct LocalConfig {
    root: Option<String>,
    scope: Option<String>,
}

#[derive(Debug)]
struct Config {
    active: ActiveSources,
    scopes: Map<String, Value>,
    local: Option<LocalConfig>,
}

#[derive(Debug, Default)]
struct SearchFilters {
    kind: Option<String>,
    category: Option<String>,
    section: Option<String>,
    page: Option<String>,
    query: Option<String>,
}

impl SearchFilters {
    fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.category.is_none()
            && self.section.is_none()
            && self.page.is_none()
            && self.query.is_none()
    }
}

// Result structures

#[derive(Serialize, Debug)]
struct TreeListing {
    status: bool,
    total: usize,
    categories: Vec<CategoryNode>,
}

#[derive(Serialize, Debug)]
struct CategoryNode {
    name: String,
    count: usize,
    sections: Vec<SectionNode>,
}

#[derive(Serialize, Debug)]
struct SectionNode {
    name: String,
    count: usize,
    pages: Vec<PageNode>,
}

#[derive(Serialize, Debug)]
struct PageNode {
    name: String,
    count: usize,
}

#[derive(Serialize, Debug)]
struct FilteredListing {
    status: bool,
    total: usize,
    filters: AppliedFilters,
    components: Vec<Component>,
}

#[derive(Serialize, Debug)]
struct AppliedFilters {
    #[serde(rename = "type")]
    kind: Option<String>,
    category: Option<String>,
    section: Option<String>,
    page: Option<String>,
    query: Option<String>,
}

impl From<&SearchFilters> for AppliedFilters {
    fn from(filters: &SearchFilters) -> Self {
        AppliedFilters {
            kind: filters.kind.clone(),
            category: filters.category.clone(),
            section: filters.section.clone(),
            page: filters.page.clone(),
            query: filters.query.clone(),
        }
    }
}

#[derive(Debug)]
enum SearchOutcome {
    Tree(TreeListing),
    Filtered(FilteredListing),
}

#[derive(Serialize, Debug)]
struct GetResult {
    status: bool,
    #[serde(rename = "type")]
    kind: String,
    id: String,
    name: String,
    scope: String,
    mode: String,
    category: String,
    section: String,
    page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    library: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assets: Option<Value>,
    code: String,
}

#[derive(Serialize, Debug)]
struct InitResult {
    status: bool,
    message: String,
    source: String,
    total: u64,
}

#[derive(Error, Debug)]
enum QueryError {
    #[error("Not initialized. Run: getui init --source <path>")]
    NotInitialized,

    #[error("No components found. Run: getui init --source <path>")]
    NoComponents,

    #[error("{}", .0.join("\n"))]
    InvalidFilters(Vec<String>),

    #[error("Component not found: {0}")]
    NotFound(String),

    #[error("scope: Missing value. Available scopes: {available}")]
    MissingScope { available: String },

    #[error("scope: Unknown scope \"{scope}\". Available scopes: {available}")]
    UnknownScope { scope: String, available: String },

    #[error("Could not read partial: {0}")]
    PartialUnreadable(String),

    #[error("Could not read component file: {0}")]
    ComponentUnreadable(String),

    #[error("Mode \"{mode}\" not available for component: {id}")]
    ModeUnavailable { mode: String, id: String },

    #[error("overview.json not found in source directory")]
    OverviewMissing,

    #[error("overview.json is missing a timestamp")]
    OverviewInvalid,

    #[error("HOME is not set and no --root was given")]
    NoHome,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    let root = cli.root.as_deref();

    let result = match cli.command {
        Commands::Init { source, json } => cmd_init(&source, root, json),
        Commands::Search { kind, category, section, page, query, json } => {
            let filters = SearchFilters { kind, category, section, page, query };
            cmd_search(&filters, root, json)
        }
        Commands::Get { value, scope, json } => cmd_get(&value, scope.as_deref(), root, json),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_init(
    source: &Path,
    root_arg: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = registry_root(root_arg)?;
    let cwd = std::env::current_dir()?;

    match init_registry(&root, source, &cwd) {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.message.green());
                println!("  Source: {}", result.source.cyan());
            }
            Ok(())
        }
        Err(err) if json => {
            println!("{}", serde_json::to_string_pretty(&failure_json(&err))?);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn cmd_search(
    filters: &SearchFilters,
    root_arg: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = registry_root(root_arg)?;
    let cwd = std::env::current_dir()?;

    match search(&root, &cwd, filters) {
        Ok(SearchOutcome::Tree(listing)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
                return Ok(());
            }

            println!("{} components\n", listing.total.to_string().green().bold());
            for category in &listing.categories {
                println!("{} ({})", category.name.cyan().bold(), category.count);
                for section in &category.sections {
                    println!("  {} ({})", section.name, section.count);
                    for page in &section.pages {
                        println!("    {} ({})", page.name.dimmed(), page.count);
                    }
                }
            }
            Ok(())
        }
        Ok(SearchOutcome::Filtered(listing)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
                return Ok(());
            }

            if listing.components.is_empty() {
                println!("{}", "No components found.".yellow());
                return Ok(());
            }

            println!("{} components\n", listing.total.to_string().green().bold());
            for component in &listing.components {
                println!(
                    "{}  {} {}",
                    component.id.cyan(),
                    component.name,
                    format!(
                        "[{} / {} / {} / {}]",
                        component.kind, component.category, component.section, component.page
                    )
                    .dimmed()
                );
            }
            Ok(())
        }
        Err(err) if json => {
            println!("{}", serde_json::to_string_pretty(&failure_json(&err))?);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn cmd_get(
    value: &str,
    scope: Option<&str>,
    root_arg: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = registry_root(root_arg)?;
    let cwd = std::env::current_dir()?;

    match get_component(&root, &cwd, value, scope) {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            // Metadata goes to stderr so the code itself stays pipeable.
            eprintln!(
                "{}  {} {}",
                result.id.cyan().bold(),
                result.name,
                format!("[{} / {} mode]", result.scope, result.mode).dimmed()
            );
            println!("{}", result.code);
            Ok(())
        }
        Err(err) if json => {
            println!("{}", serde_json::to_string_pretty(&failure_json(&err))?);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

// Core query functions

fn search(root: &Path, cwd: &Path, filters: &SearchFilters) -> Result<SearchOutcome, QueryError> {
    let config = load_config(root, cwd)?;
    let components = load_components(root, &config)?;

    let messages = validate_filters(&components, filters);
    if !messages.is_empty() {
        return Err(QueryError::InvalidFilters(messages));
    }

    if filters.is_empty() {
        let categories = build_tree(&components);
        return Ok(SearchOutcome::Tree(TreeListing {
            status: true,
            total: components.len(),
            categories,
        }));
    }

    let filtered = filter_components(&components, filters);
    Ok(SearchOutcome::Filtered(FilteredListing {
        status: true,
        total: filtered.len(),
        filters: AppliedFilters::from(filters),
        components: filtered.into_iter().map(Component::cleaned).collect(),
    }))
}

fn get_component(
    root: &Path,
    cwd: &Path,
    value: &str,
    scope: Option<&str>,
) -> Result<GetResult, QueryError> {
    let config = load_config(root, cwd)?;

    // Explicit --scope wins; the local config written by init supplies the default.
    let scope = scope
        .map(str::to_string)
        .or_else(|| config.local.as_ref().and_then(|local| local.scope.clone()))
        .ok_or_else(|| QueryError::MissingScope { available: scope_names(&config.scopes) })?;

    let mode = config
        .scopes
        .get(&scope)
        .and_then(|settings| settings.get("mode"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| QueryError::UnknownScope {
            scope: scope.clone(),
            available: scope_names(&config.scopes),
        })?;

    let components = load_components(root, &config)?;

    let entry = if is_hash(value) {
        components.iter().find(|c| c.hash.as_deref() == Some(value))
    } else {
        components.iter().find(|c| c.id == value)
    }
    .ok_or_else(|| QueryError::NotFound(value.to_string()))?;

    if entry.kind == "uikit" {
        let library = entry
            .library
            .as_deref()
            .ok_or_else(|| QueryError::PartialUnreadable(entry.id.clone()))?;
        let partial = entry
            .assets
            .as_ref()
            .and_then(|assets| assets.get("partial"))
            .and_then(Value::as_str)
            .ok_or_else(|| QueryError::PartialUnreadable(entry.id.clone()))?;

        let partial_path = root.join("uikit").join(library).join("partials").join(partial);
        let code = read_text(&partial_path)
            .ok_or_else(|| QueryError::PartialUnreadable(partial.to_string()))?;

        return Ok(GetResult {
            status: true,
            kind: entry.kind.clone(),
            id: entry.id.clone(),
            name: entry.name.clone(),
            scope,
            mode,
            category: entry.category.clone(),
            section: entry.section.clone(),
            page: entry.page.clone(),
            hash: None,
            library: Some(library.to_string()),
            assets: entry.assets.clone(),
            code,
        });
    }

    let filename = entry
        .filename
        .as_deref()
        .ok_or_else(|| QueryError::ComponentUnreadable(entry.id.clone()))?;
    let timestamp = config.active.blocks.as_deref().ok_or(QueryError::NotInitialized)?;
    let component_path = root.join("blocks").join(timestamp).join(filename);
    let data: ComponentFile = read_json(&component_path)
        .ok_or_else(|| QueryError::ComponentUnreadable(filename.to_string()))?;

    let code = data
        .code
        .get(&mode)
        .and_then(Value::as_str)
        .ok_or_else(|| QueryError::ModeUnavailable {
            mode: mode.clone(),
            id: entry.id.clone(),
        })?;

    Ok(GetResult {
        status: true,
        kind: entry.kind.clone(),
        id: entry.id.clone(),
        name: entry.name.clone(),
        scope,
        mode,
        category: entry.category.clone(),
        section: entry.section.clone(),
        page: entry.page.clone(),
        hash: entry.hash.clone(),
        library: None,
        assets: None,
        code: code.to_string(),
    })
}

fn init_registry(root: &Path, source: &Path, cwd: &Path) -> Result<InitResult, QueryError> {
    let source = fs::canonicalize(source).unwrap_or_else(|_| source.to_path_buf());

    let overview: Overview =
        read_json(&source.join("overview.json")).ok_or(QueryError::OverviewMissing)?;
    let timestamp = overview.timestamp.clone().ok_or(QueryError::OverviewInvalid)?;

    let target = root.join("blocks").join(&timestamp);
    fs::create_dir_all(&target)?;
    fs::copy(source.join("overview.json"), target.join("overview.json"))?;

    // Pre-rendered component data files live flat under 1-data/.
    let data_dir = source.join("1-data");
    if let Ok(entries) = fs::read_dir(&data_dir) {
        for entry in entries.filter_map(|e| e.ok()) {
            let name = entry.file_name();
            if name.to_string_lossy().ends_with(".json") {
                fs::copy(entry.path(), target.join(&name))?;
            }
        }
    }

    let existing: Option<GlobalConfig> = read_json(&root.join("config.json"));
    let merged = merge_config(existing, &timestamp);
    fs::write(root.join("config.json"), serde_json::to_string_pretty(&merged)?)?;

    let local_dir = cwd.join(".getui");
    fs::create_dir_all(&local_dir)?;
    let local = LocalConfig {
        root: Some(root.display().to_string()),
        scope: Some("app".to_string()),
    };
    fs::write(local_dir.join("config.json"), serde_json::to_string_pretty(&local)?)?;

    let total = overview.total.unwrap_or(overview.components.len() as u64);
    Ok(InitResult {
        status: true,
        message: format!("Initialized {} with {} blocks", root.display(), total),
        source: source.display().to_string(),
        total,
    })
}

/// Merge a persisted global config with a freshly initialized blocks collection.
/// The uikit sources and scope mapping survive re-initialization.
fn merge_config(existing: Option<GlobalConfig>, timestamp: &str) -> GlobalConfig {
    let (uikit, scopes) = match existing {
        Some(config) => (config.active.uikit, config.scopes),
        None => (None, default_scopes()),
    };

    GlobalConfig {
        active: ActiveSources {
            blocks: Some(timestamp.to_string()),
            uikit,
        },
        scopes,
    }
}

fn default_scopes() -> Map<String, Value> {
    let mut scopes = Map::new();
    scopes.insert("public".to_string(), json!({ "mode": "light" }));
    scopes.insert("app".to_string(), json!({ "mode": "dark" }));
    scopes.insert("admin".to_string(), json!({ "mode": "dark" }));
    scopes
}

fn load_config(root: &Path, cwd: &Path) -> Result<Config, QueryError> {
    let global: GlobalConfig =
        read_json(&root.join("config.json")).ok_or(QueryError::NotInitialized)?;
    let local: Option<LocalConfig> = read_json(&cwd.join(".getui").join("config.json"));

    Ok(Config {
        active: global.active,
        scopes: global.scopes,
        local,
    })
}

/// Flatten every active overview into one ordered component list: the blocks
/// collection first, then each uikit library in configuration key order.
/// A missing or unparsable overview contributes nothing; only an empty final
/// list is an error.
fn load_components(root: &Path, config: &Config) -> Result<Vec<Component>, QueryError> {
    let mut all = Vec::new();

    if let Some(timestamp) = &config.active.blocks {
        let overview_path = root.join("blocks").join(timestamp).join("overview.json");
        if let Some(overview) = read_json::<Overview>(&overview_path) {
            all.extend(overview.components);
        }
    }

    if let Some(libraries) = &config.active.uikit {
        // Libraries are independent read-only sources, so the reads run in
        // parallel. Joining in key order keeps the output deterministic no
        // matter which read finishes first.
        let batches: Vec<Vec<Component>> = thread::scope(|s| {
            let handles: Vec<_> = libraries
                .keys()
                .map(|library| {
                    let overview_path = root.join("uikit").join(library).join("overview.json");
                    s.spawn(move || {
                        read_json::<Overview>(&overview_path)
                            .map(|overview| overview.components)
                            .unwrap_or_default()
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_default())
                .collect()
        });

        for batch in batches {
            all.extend(batch);
        }
    }

    if all.is_empty() {
        return Err(QueryError::NoComponents);
    }

    Ok(all)
}

/// Aggregate a flat component list into a category -> section -> page tree.
/// Ordering at every level is first-seen; ancestor counts are roll-up sums.
fn build_tree(components: &[Component]) -> Vec<CategoryNode> {
    let mut categories: Vec<CategoryNode> = Vec::new();

    for component in components {
        let ci = match categories.iter().position(|c| c.name == component.category) {
            Some(i) => i,
            None => {
                categories.push(CategoryNode {
                    name: component.category.clone(),
                    count: 0,
                    sections: Vec::new(),
                });
                categories.len() - 1
            }
        };

        let sections = &mut categories[ci].sections;
        let si = match sections.iter().position(|s| s.name == component.section) {
            Some(i) => i,
            None => {
                sections.push(SectionNode {
                    name: component.section.clone(),
                    count: 0,
                    pages: Vec::new(),
                });
                sections.len() - 1
            }
        };

        let pages = &mut sections[si].pages;
        match pages.iter_mut().find(|p| p.name == component.page) {
            Some(page) => page.count += 1,
            None => pages.push(PageNode {
                name: component.page.clone(),
                count: 1,
            }),
        }
    }

    for category in &mut categories {
        for section in &mut category.sections {
            section.count = section.pages.iter().map(|p| p.count).sum();
        }
        category.count = category.sections.iter().map(|s| s.count).sum();
    }

    categories
}

fn filter_components<'a>(
    components: &'a [Component],
    filters: &SearchFilters,
) -> Vec<&'a Component> {
    components
        .iter()
        .filter(|component| {
            let match_kind = filters.kind.as_deref().map_or(true, |k| component.kind == k);
            let match_category = filters
                .category
                .as_deref()
                .map_or(true, |c| component.category == c);
            let match_section = filters
                .section
                .as_deref()
                .map_or(true, |s| component.section == s);
            let match_page = filters.page.as_deref().map_or(true, |p| component.page == p);
            let match_query = filters
                .query
                .as_deref()
                .map_or(true, |q| matches_query(component, q));

            match_kind && match_category && match_section && match_page && match_query
        })
        .collect()
}

fn matches_query(component: &Component, query: &str) -> bool {
    let needle = query.to_lowercase();
    let mut fields = vec![component.name.as_str(), component.id.as_str()];
    if let Some(slug) = &component.slug {
        fields.push(slug);
    }

    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Check the enum-like filters against the values actually present in the
/// loaded set. Invalid fields are collected independently; `page` legitimately
/// varies per category/section context and is never checked. Free-text `query`
/// is not a candidate for validation at all.
fn validate_filters(components: &[Component], filters: &SearchFilters) -> Vec<String> {
    let mut messages = Vec::new();

    let checks: [(&str, &Option<String>, fn(&Component) -> &str); 3] = [
        ("type", &filters.kind, |c| &c.kind),
        ("category", &filters.category, |c| &c.category),
        ("section", &filters.section, |c| &c.section),
    ];

    for (field, supplied, accessor) in checks {
        let Some(value) = supplied else { continue };

        let allowed = distinct_values(components, accessor);
        if allowed.iter().any(|a| a == value) {
            continue;
        }

        let hint = match find_closest(value, &allowed) {
            Some(closest) => format!(" Did you mean \"{closest}\"?"),
            None => String::new(),
        };
        messages.push(format!(
            "{field}: Unknown value \"{value}\". Allowed: {}{hint}",
            allowed.join(", ")
        ));
    }

    messages
}

/// Distinct values of one field, in first-seen order.
fn distinct_values<F>(components: &[Component], field: F) -> Vec<String>
where
    F: Fn(&Component) -> &str,
{
    let mut seen = HashSet::new();
    let mut values = Vec::new();

    for component in components {
        let value = field(component);
        if seen.insert(value.to_string()) {
            values.push(value.to_string());
        }
    }

    values
}

/// Closest allowed value by case-insensitive edit distance, if any candidate
/// is strictly closer than 4 edits. Ties keep the earliest candidate.
fn find_closest(input: &str, allowed: &[String]) -> Option<String> {
    let input_lower = input.to_lowercase();
    let mut closest = None;
    let mut min_distance = 4;

    for candidate in allowed {
        let distance = levenshtein(&input_lower, &candidate.to_lowercase());
        if distance < min_distance {
            min_distance = distance;
            closest = Some(candidate.clone());
        }
    }

    closest
}

/// Classic Levenshtein edit distance: insertion, deletion, substitution at
/// unit cost each.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut d = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in d[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
        }
    }

    d[a.len()][b.len()]
}

// Helper functions

fn registry_root(root_arg: Option<&Path>) -> Result<PathBuf, QueryError> {
    match root_arg {
        Some(path) => Ok(path.to_path_buf()),
        None => std::env::var("HOME")
            .map(|home| Path::new(&home).join(".getui"))
            .map_err(|_| QueryError::NoHome),
    }
}

fn scope_names(scopes: &Map<String, Value>) -> String {
    scopes.keys().cloned().collect::<Vec<_>>().join(", ")
}

fn is_hash(value: &str) -> bool {
    let hash_re = Regex::new(r"^[a-f0-9]{32}$").unwrap();
    hash_re.is_match(value)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn read_text(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

fn failure_json(err: &QueryError) -> Value {
    match err {
        QueryError::InvalidFilters(messages) => json!({ "status": false, "messages": messages }),
        _ => json!({ "status": false, "error": err.to_string() }),
    }
}

//! CLI for jpegmeta: dump metadata sections and tags from JPEG files/directories.

#![cfg(feature = "cli")]

use clap::Parser;
use indexmap::IndexMap;
use jpegmeta::{is_jpeg, scan, tags, MetadataImage, Section};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "jpegmeta")]
#[command(about = "Extract EXIF/GPS/JFIF/IPTC metadata from JPEG files", long_about = None)]
struct Args {
    /// Path to a file or directory to scan (use -d/--directory to scan a whole directory)
    path: Option<String>,

    /// Scan a whole directory (optionally with -r to recurse into subdirectories)
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    directory: Option<String>,

    /// When scanning a directory, recurse into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// File extensions to scan (comma-separated). No-extension files are always scanned (content sniffed). Use --all to ignore extension filter.
    #[arg(short, long, default_value = "jpg,jpeg,jpe,jfif")]
    extensions: String,

    /// Print one specific tag instead of the full dump, as SECTION:TAG
    /// (e.g. "EXIF:0xA002" or "EXIF:PixelXDimension")
    #[arg(short, long, value_name = "SECTION:TAG")]
    tag: Option<String>,

    /// Scan all files and sniff content (ignore extension filter)
    #[arg(long)]
    all: bool,

    /// Output JSON per file (one line per file unless --pretty)
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON (use with --json)
    #[arg(long)]
    pretty: bool,

    /// Quiet: only print files that failed to parse
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let exts: std::collections::HashSet<String> = args
        .extensions
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .collect();

    let path_str = args
        .directory
        .as_ref()
        .or(args.path.as_ref())
        .ok_or("Missing path: give a file/directory as argument or use -d/--directory <DIR>")?;
    let path = Path::new(path_str.as_str());

    if !path.exists() {
        eprintln!("Not found: {}", path.display());
        std::process::exit(1);
    }

    if path.is_file() {
        if args.directory.is_some() {
            eprintln!(
                "--directory expects a directory, not a file: {}",
                path.display()
            );
            std::process::exit(1);
        }
        scan_file(path, &args, &exts)?;
        return Ok(());
    }

    if path.is_dir() {
        if !args.quiet {
            eprintln!(
                "Scanning directory: {} {}",
                path.display(),
                if args.recursive { "(recursive)" } else { "" }
            );
        }
        scan_dir(path, &args, &exts)?;
        return Ok(());
    }

    eprintln!("Not a file or directory: {}", path.display());
    std::process::exit(1);
}

fn wants(path: &Path, args: &Args, exts: &std::collections::HashSet<String>) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    // No extension => always scan, is_jpeg decides from content.
    args.all || ext.is_empty() || exts.contains(&ext)
}

fn scan_file(
    path: &Path,
    args: &Args,
    exts: &std::collections::HashSet<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if !wants(path, args, exts) {
        if !args.quiet {
            eprintln!("Skip (extension): {}", path.display());
        }
        return Ok(());
    }
    let bytes = fs::read(path)?;
    if !is_jpeg(&bytes) {
        if !args.quiet {
            eprintln!("Skip (not a JPEG): {}", path.display());
        }
        return Ok(());
    }
    match scan(&bytes) {
        Ok(image) => print_image(&path.display().to_string(), &image, args)?,
        Err(e) => println!("ERROR {}: {}", path.display(), e),
    }
    Ok(())
}

fn scan_dir(
    dir: &Path,
    args: &Args,
    exts: &std::collections::HashSet<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let walker = if args.recursive {
        WalkDir::new(dir).into_iter()
    } else {
        WalkDir::new(dir).max_depth(1).into_iter()
    };

    let mut total = 0u64;
    let mut failed = 0u64;

    for entry in walker.filter_entry(|e| !e.path().starts_with(".")) {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !wants(path, args, exts) {
            continue;
        }
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(_) => continue,
        };
        if !is_jpeg(&bytes) {
            continue;
        }
        total += 1;
        match scan(&bytes) {
            Ok(image) => print_image(&path.display().to_string(), &image, args)?,
            Err(e) => {
                failed += 1;
                println!("ERROR {}: {}", path.display(), e);
            }
        }
    }

    if !args.quiet {
        eprintln!("Scanned {} files, {} failed to parse", total, failed);
    }
    Ok(())
}

/// Parse the --tag argument: "SECTION:TAG" with TAG either a well-known
/// name or a hex/decimal number.
fn parse_tag_query(query: &str) -> Result<(&str, u16), String> {
    let (section, tag_str) = query
        .split_once(':')
        .ok_or_else(|| format!("expected SECTION:TAG, got '{query}'"))?;
    let tag = if let Some(hex) = tag_str.strip_prefix("0x").or(tag_str.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16).ok()
    } else if tag_str.chars().all(|c| c.is_ascii_digit()) {
        tag_str.parse().ok()
    } else {
        tags::tag_id(tag_str)
    };
    tag.map(|t| (section, t))
        .ok_or_else(|| format!("unknown tag '{tag_str}'"))
}

fn print_image(
    path: &str,
    image: &MetadataImage,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(ref query) = args.tag {
        let (section, tag) = parse_tag_query(query)?;
        match image.read_value(section, tag) {
            Ok(value) => {
                let label = value
                    .as_u32()
                    .and_then(|v| tags::enum_label(tag, v))
                    .map(|l| format!(" ({l})"))
                    .unwrap_or_default();
                println!("{path}: {value}{label}");
            }
            Err(e) => println!("{path}: {e}"),
        }
        return Ok(());
    }

    let info = image.basic_info();
    if args.json {
        let mut out = IndexMap::<String, serde_json::Value>::new();
        out.insert("path".to_string(), serde_json::Value::String(path.into()));
        out.insert(
            "sections".to_string(),
            serde_json::to_value(image.section_names().collect::<Vec<_>>())?,
        );
        out.insert("basic_info".to_string(), serde_json::to_value(&info)?);
        let json_str = if args.pretty {
            serde_json::to_string_pretty(&out)?
        } else {
            serde_json::to_string(&out)?
        };
        println!("{}", json_str);
        return Ok(());
    }

    if args.quiet {
        return Ok(());
    }
    println!("{path}");
    println!(
        "  sections: {}",
        image.section_names().collect::<Vec<_>>().join(", ")
    );
    if let (Some(w), Some(h)) = (info.width, info.height) {
        println!("  dimensions: {w}x{h}");
    }
    if let Some(ref t) = info.title {
        println!("  title: {t}");
    }
    if let Some(ref d) = info.description {
        println!("  description: {d}");
    }
    if !info.keywords.is_empty() {
        println!("  keywords: {}", info.keywords.join(", "));
    }
    if let Some(Section::Raw(com)) = image.section("COM") {
        println!("  comment: {}", com.text());
    }
    // A short roster of common tags, with enum labels where defined.
    for &tag in &[
        tags::TAG_DATE_TIME,
        tags::TAG_ORIENTATION,
        0x010F, // Make
        0x0110, // Model
        0x8822, // ExposureProgram
        0x9207, // MeteringMode
        0x9209, // Flash
    ] {
        if let Ok(value) = image.read_value("EXIF", tag) {
            let name = tags::tag_name(tag).unwrap_or("?");
            match value.as_u32().and_then(|v| tags::enum_label(tag, v)) {
                Some(label) => println!("  {name}: {label}"),
                None => println!("  {name}: {value}"),
            }
        }
    }
    Ok(())
}

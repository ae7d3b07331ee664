use anyhow::Result;
use catalog::{
    content, exhibition_by_slug, related_stories, select_exhibitions, select_stories, showcase,
    story_by_slug, story_position, truncate_excerpt, ExhibitionFilter, SortKey, StoryFilter,
    CARD_EXCERPT_BUDGET,
};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use shared::domain::{ExhibitionKind, ExhibitionStatus, Story};
use ui_core::{story_image, AmbientDisplay, Carousel, HeroCutouts, Key, LogoStack};

#[derive(Parser, Debug)]
struct Cli {
    /// Seed for featured flags; omit for a fresh draw.
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Stories {
        #[arg(long)]
        theme: Option<String>,
        #[arg(long)]
        time_period: Option<String>,
        #[arg(long)]
        geography: Option<String>,
        #[arg(long, default_value = "newest")]
        sort: SortKey,
    },
    Exhibitions {
        #[arg(long)]
        kind: Option<ExhibitionKind>,
        #[arg(long)]
        status: Option<ExhibitionStatus>,
        #[arg(long, default_value = "newest")]
        sort: SortKey,
    },
    Story {
        slug: String,
    },
    Exhibition {
        slug: String,
    },
    /// First exhibitions in the home page strip.
    Showcase {
        #[arg(default_value_t = 3)]
        n: usize,
    },
    /// Hero cutout placements; `--shuffle` draws a fresh set.
    Hero {
        #[arg(long)]
        shuffle: bool,
    },
    /// Walk the story carousel with a comma-separated list of key names.
    Carousel {
        #[arg(long, default_value = "")]
        keys: String,
        #[arg(long, default_value_t = 0)]
        start: usize,
    },
    Logo {
        scroll: f64,
        #[arg(long)]
        dark: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("warn").init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.command {
        Command::Stories {
            theme,
            time_period,
            geography,
            sort,
        } => {
            let filter = StoryFilter {
                theme,
                time_period,
                geography,
            };
            for item in select_stories(content::stories(), &filter, sort, &mut rng) {
                let marker = if item.is_featured { "*" } else { " " };
                println!(
                    "{marker} {:<28} {:<14} {:<12} {}",
                    item.record.slug, item.record.time_period, item.record.geography, item.record.title
                );
            }
        }
        Command::Exhibitions { kind, status, sort } => {
            let filter = ExhibitionFilter {
                kind: kind.map(|kind| kind.as_str().to_string()),
                status: status.map(|status| status.as_str().to_string()),
            };
            for item in select_exhibitions(content::exhibitions(), &filter, sort, &mut rng) {
                let marker = if item.is_featured { "*" } else { " " };
                println!(
                    "{marker} {} {:<10} {:<9} {}",
                    item.record.start_date,
                    item.record.kind.as_str(),
                    item.record.status.as_str(),
                    item.record.title
                );
            }
        }
        Command::Story { slug } => {
            let story = story_by_slug(content::stories(), &slug)?;
            println!("{} [{}]", story.title, story.accent_color);
            println!("{} / {}", story.time_period, story.geography);
            if let Some(position) = story_position(content::stories(), &slug) {
                println!("image: {}", story_image(position));
            }
            println!("{}", truncate_excerpt(&story.excerpt, CARD_EXCERPT_BUDGET));
        }
        Command::Exhibition { slug } => {
            let exhibition = exhibition_by_slug(content::exhibitions(), &slug)?;
            println!("{} ({})", exhibition.title, exhibition.dates);
            println!("{}", exhibition.short_description);
            for story in related_stories(exhibition, content::stories()) {
                println!("  related: {}", story.title);
            }
        }
        Command::Showcase { n } => {
            for exhibition in showcase(content::exhibitions(), n) {
                println!("{:<28} {}", exhibition.slug, exhibition.dates);
            }
        }
        Command::Hero { shuffle } => {
            let cutouts = if shuffle {
                HeroCutouts::randomize(&mut rng)
            } else {
                HeroCutouts::default()
            };
            for placed in cutouts.placements() {
                println!(
                    "{:<32} z={} scale={:.3} delay={:.1}s",
                    placed.src, placed.slot.z_index, placed.scale, placed.delay_secs
                );
            }
        }
        Command::Carousel { keys, start } => {
            let stories = content::stories();
            let mut carousel = Carousel::new(stories.len());
            carousel.go_to(start);
            print_window(&carousel, stories);
            for name in keys.split(',').map(str::trim).filter(|k| !k.is_empty()) {
                let outcome = carousel.handle_key(Key::from_name(name));
                if !outcome.handled {
                    println!("{name}: ignored");
                    continue;
                }
                print!("{name}: ");
                print_window(&carousel, stories);
            }
        }
        Command::Logo { scroll, dark } => {
            let logo = LogoStack::from_ambient(AmbientDisplay {
                scroll_offset: scroll,
                is_over_dark_surface: dark,
            });
            println!(
                "top={} bottom={} size={:.1}px wordmark={:.2} inverted={}",
                logo.top_src(),
                logo.bottom_src(),
                logo.mark_size_px,
                logo.wordmark_opacity,
                logo.inverted
            );
        }
    }

    Ok(())
}

fn print_window(carousel: &Carousel, stories: &[Story]) {
    let window: Vec<String> = carousel
        .visible(stories)
        .iter()
        .map(|visible| {
            if visible.offset == 0 {
                format!("[{}]", visible.item.slug)
            } else {
                visible.item.slug.clone()
            }
        })
        .collect();
    println!("{} ({}/{})", window.join("  "), carousel.current_index() + 1, carousel.len());
}

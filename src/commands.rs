use std::io::Write as _;
use std::path::Path;

use anyhow::Context as _;

use crate::cli::{FetchArgs, FictionArgs, HttpArgs};
use crate::crawler::RoyalRoadCrawler;
use crate::models::{CrawlSummary, FictionId};

fn connect(http: &HttpArgs, fiction: &str) -> anyhow::Result<(RoyalRoadCrawler, FictionId)> {
    let config = http.to_config().context("build crawler config")?;
    let crawler = RoyalRoadCrawler::new(config).context("create crawler")?;
    let fiction_id = crawler
        .site()
        .resolve_fiction(fiction)
        .with_context(|| format!("resolve fiction {fiction:?}"))?;
    Ok((crawler, fiction_id))
}

pub async fn fetch(args: FetchArgs) -> anyhow::Result<CrawlSummary> {
    let (crawler, fiction_id) = connect(&args.http, &args.fiction)?;
    crawler
        .crawl_fiction(&fiction_id, Path::new(&args.out))
        .await
        .with_context(|| format!("crawl fiction {fiction_id}"))
}

pub async fn chapters(args: FictionArgs) -> anyhow::Result<()> {
    let (crawler, fiction_id) = connect(&args.http, &args.fiction)?;
    let chapters = crawler
        .get_chapter_list(&fiction_id)
        .await
        .with_context(|| format!("list chapters of fiction {fiction_id}"))?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &chapters).context("write chapter list json")?;
    writeln!(stdout).context("write newline")?;
    Ok(())
}

pub async fn resolve(args: FictionArgs) -> anyhow::Result<()> {
    let (crawler, fiction_id) = connect(&args.http, &args.fiction)?;
    let canonical_url = crawler
        .get_canonical_fiction_url(&fiction_id)
        .await
        .with_context(|| format!("resolve canonical url of fiction {fiction_id}"))?;
    println!("{fiction_id}\t{canonical_url}");
    Ok(())
}

//! CLI command implementations

use colored::Colorize;

use crate::codec;
use crate::interfaces::cli::CliError;
use crate::storage::{LinkStore, UrlDetails};
use crate::utils::{normalize_url, parse_tags};

pub async fn add_url(
    store: &LinkStore,
    raw_url: &str,
    tags: Option<&str>,
    creator: Option<&str>,
) -> Result<(), CliError> {
    let uri = normalize_url(raw_url).map_err(|e| CliError::ParseError(e.to_string()))?;
    let tag_list = parse_tags(tags.unwrap_or_default());

    let creator_id = match creator {
        Some(name) => Some(store.creator_id(name).await?.ok_or_else(|| {
            CliError::CommandError(format!("Unknown creator: {}", name))
        })?),
        None => None,
    };

    let code = store.add_url(&uri, &tag_list, creator_id).await?;

    println!(
        "{} Stored: {} -> {}",
        "✓".bold().green(),
        code.cyan(),
        uri.blue().underline()
    );
    Ok(())
}

fn print_details(details: &UrlDetails) {
    let mut parts = vec![format!(
        "{} -> {}",
        details.code.cyan(),
        details.uri.blue().underline()
    )];
    parts.push(
        format!(
            "(by {}, {})",
            details.creator_name,
            details.created.format("%Y-%m-%d %H:%M:%S UTC")
        )
        .dimmed()
        .to_string(),
    );
    if !details.tags.is_empty() {
        parts.push(format!("[{}]", details.tags.join(", ")).yellow().to_string());
    }
    println!("  {}", parts.join(" "));
}

pub async fn show_url(store: &LinkStore, code: &str) -> Result<(), CliError> {
    match store.get_url_details(code).await? {
        Some(details) => {
            print_details(&details);
            Ok(())
        }
        None => Err(CliError::CommandError(format!("No URL for code {}", code))),
    }
}

pub async fn list_urls(store: &LinkStore) -> Result<(), CliError> {
    let all = store.list_url_details().await?;

    if all.is_empty() {
        println!("{} No URLs stored", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Stored URLs:".bold().green());
    println!();
    for details in &all {
        print_details(details);
    }
    println!();
    println!(
        "{} Total {} URLs",
        "ℹ".bold().blue(),
        all.len().to_string().green()
    );
    Ok(())
}

pub async fn show_tags(store: &LinkStore, tag: Option<&str>) -> Result<(), CliError> {
    match tag {
        Some(tag) => {
            let summaries = store.list_urls_by_tag(tag).await?;
            println!("{} {}", "URLs tagged".bold().green(), tag.yellow());
            for s in &summaries {
                println!(
                    "  {} -> {} {}",
                    s.code.cyan(),
                    s.uri.blue().underline(),
                    format!("(by {})", s.creator_name).dimmed()
                );
            }
        }
        None => {
            let tags = store.list_tags().await?;
            if tags.is_empty() {
                println!("{} No tags", "ℹ".bold().blue());
            }
            for t in &tags {
                println!("  {} {}", t.tag.yellow(), format!("({})", t.count).dimmed());
            }
        }
    }
    Ok(())
}

pub fn encode_id(id: u64) -> Result<(), CliError> {
    println!("{}", codec::encode(id));
    Ok(())
}

pub fn decode_code(code: &str) -> Result<(), CliError> {
    let id = codec::decode(code).map_err(|e| CliError::ParseError(e.to_string()))?;
    println!("{}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn temp_store() -> (LinkStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("cli.db").display());
        let store = LinkStore::new(&db_url).await.unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn test_add_url_with_tags_stores_row() {
        let (store, _dir) = temp_store().await;

        add_url(&store, "example.com/a", Some("news, tech,,"), None)
            .await
            .unwrap();

        let details = store.get_url_details("b").await.unwrap().unwrap();
        assert_eq!(details.uri, "http://example.com/a");
        assert_eq!(details.tags, vec!["news".to_string(), "tech".to_string()]);
        assert_eq!(details.creator_name, "anonymous");
    }

    #[tokio::test]
    async fn test_add_url_unknown_creator_is_rejected() {
        let (store, _dir) = temp_store().await;

        let err = add_url(&store, "http://a.test", None, Some("nobody"))
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::CommandError(_)));
        assert_eq!(store.count_urls().await.unwrap(), 0);

        add_url(&store, "http://a.test", None, Some("anonymous"))
            .await
            .unwrap();
        assert_eq!(store.count_urls().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_add_url_rejects_invalid_url() {
        let (store, _dir) = temp_store().await;

        let err = add_url(&store, "http://127.0.0.1", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::ParseError(_)));
        assert_eq!(store.count_urls().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_show_url_unknown_and_malformed() {
        let (store, _dir) = temp_store().await;
        store.add_url("http://a.test", &[], None).await.unwrap();

        show_url(&store, "b").await.unwrap();

        let err = show_url(&store, "zzz").await.unwrap_err();
        assert!(matches!(err, CliError::CommandError(_)));

        let err = show_url(&store, "0").await.unwrap_err();
        assert!(matches!(err, CliError::ParseError(_)));
    }

    #[test]
    fn test_decode_code_errors() {
        assert!(decode_code("b").is_ok());
        assert!(matches!(decode_code(""), Err(CliError::ParseError(_))));
        assert!(matches!(decode_code("l"), Err(CliError::ParseError(_))));
    }
}

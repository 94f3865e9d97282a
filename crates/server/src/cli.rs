//! CLI argument parsing and subcommand dispatch.

use numstat_core::Operation;

/// Parse CLI arguments and dispatch to the appropriate subcommand.
///
/// Returns `Ok(true)` if a subcommand was handled, `Ok(false)` if `serve`
/// should be started (handled by the caller).
pub fn dispatch(args: &[String]) -> anyhow::Result<bool> {
    match args.get(1).map(|s| s.as_str()) {
        None | Some("serve") => Ok(false),
        Some("compute") => {
            let operation = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Usage: numstat-server compute <operation> <nums>"))?;
            println!("{}", compute(operation, args.get(3).map(|s| s.as_str()))?);
            Ok(true)
        }
        _ => {
            print_usage();
            Ok(true)
        }
    }
}

/// Run one operation and render the result as JSON.
fn compute(operation: &str, nums: Option<&str>) -> anyhow::Result<String> {
    let result = numstat_core::evaluate(operation, nums)?;
    Ok(serde_json::to_string(&result)?)
}

fn print_usage() {
    let operations: Vec<&str> = Operation::ALL.iter().map(Operation::as_str).collect();
    println!("numstat-server v{}", env!("CARGO_PKG_VERSION"));
    println!("Usage: numstat-server <command>");
    println!("  serve                          Start HTTP server (default)");
    println!("  compute <operation> <nums>     Compute one statistic and print JSON");
    println!("  operations: {}", operations.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn serve_is_default() {
        assert!(!dispatch(&args(&["numstat-server"])).unwrap());
        assert!(!dispatch(&args(&["numstat-server", "serve"])).unwrap());
    }

    #[test]
    fn compute_renders_json() {
        let out = compute("median", Some("5,1,3")).unwrap();
        assert_eq!(out, r#"{"operation":"median","value":3.0}"#);
    }

    #[test]
    fn compute_reports_validation_errors() {
        let err = compute("mean", Some("1,,2")).unwrap_err();
        assert_eq!(err.to_string(), "invalid number received");

        let err = compute("mean", None).unwrap_err();
        assert_eq!(err.to_string(), "nums are required");
    }

    #[test]
    fn compute_without_operation_fails() {
        assert!(dispatch(&args(&["numstat-server", "compute"])).is_err());
    }
}

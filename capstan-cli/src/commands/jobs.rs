//! Job listing command

use std::process::ExitCode;

use anyhow::Result;
use colored::*;

use capstan_client::JenkinsClient;

/// List the jobs the server knows about
pub async fn list_jobs(client: &JenkinsClient) -> Result<ExitCode> {
    let jobs = client.list_jobs().await?;

    if jobs.is_empty() {
        println!("{}", "No jobs found.".yellow());
    } else {
        println!("{}", format!("Found {} job(s):", jobs.len()).bold());
        println!();
        for job in jobs {
            println!("  {} {}", "▸".cyan(), job.name);
            if let Some(url) = &job.url {
                println!("    {}", url.dimmed());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

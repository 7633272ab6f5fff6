//! View-rendering collaborator: one function per page, data in, HTML out.
//! Pages are deliberately plain; theming is not this service's job.

use axum::response::Html;

use crate::models::{DeploymentInfo, StatusMetrics};

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n"
    ))
}

fn deployment_table(info: &DeploymentInfo) -> String {
    format!(
        "<table>\n\
         <tr><th>Version</th><td>{}</td></tr>\n\
         <tr><th>Build</th><td>{}</td></tr>\n\
         <tr><th>Commit</th><td>{}</td></tr>\n\
         <tr><th>Deployed</th><td>{}</td></tr>\n\
         <tr><th>Started</th><td>{}</td></tr>\n\
         </table>",
        info.version, info.build_number, info.commit_hash, info.deployment_time, info.deployment_date
    )
}

pub fn home(info: &DeploymentInfo) -> Html<String> {
    let body = format!(
        "<h1>Status Server</h1>\n\
         <p>Host metrics and deployment status for this machine.</p>\n\
         {}\n\
         <ul>\n\
         <li><a href=\"/status\">System status</a></li>\n\
         <li><a href=\"/about\">About</a></li>\n\
         <li><a href=\"/health\">Health (JSON)</a></li>\n\
         </ul>",
        deployment_table(info)
    );
    layout("Status Server", &body)
}

pub fn about(info: &DeploymentInfo) -> Html<String> {
    let body = format!(
        "<h1>About</h1>\n\
         <p>A small HTTP service reporting CPU, memory and disk readings of \
          its host, plus the metadata of the currently deployed build.</p>\n\
         {}",
        deployment_table(info)
    );
    layout("About - Status Server", &body)
}

pub fn status(metrics: &StatusMetrics) -> Html<String> {
    let body = format!(
        "<h1>System Status</h1>\n\
         <table>\n\
         <tr><th>CPU usage</th><td>{:.1}%</td></tr>\n\
         <tr><th>Memory usage</th><td>{:.1}%</td></tr>\n\
         <tr><th>Disk usage</th><td>{:.1}%</td></tr>\n\
         <tr><th>Memory total</th><td>{} GiB</td></tr>\n\
         <tr><th>Memory available</th><td>{} GiB</td></tr>\n\
         <tr><th>Disk total</th><td>{} GiB</td></tr>\n\
         <tr><th>Disk free</th><td>{} GiB</td></tr>\n\
         </table>\n\
         <p>Sampled at {}</p>",
        metrics.cpu_usage,
        metrics.memory_usage,
        metrics.disk_usage,
        metrics.memory_total_gb,
        metrics.memory_available_gb,
        metrics.disk_total_gb,
        metrics.disk_free_gb,
        metrics.timestamp
    );
    layout("System Status", &body)
}

pub fn not_found() -> Html<String> {
    layout(
        "Page Not Found",
        "<h1>404</h1>\n<p>The page you requested does not exist.</p>\n\
         <p><a href=\"/\">Back to the home page</a></p>",
    )
}

pub fn error(message: &str) -> Html<String> {
    let body = format!(
        "<h1>Something went wrong</h1>\n<p>{message}</p>\n\
         <p><a href=\"/\">Back to the home page</a></p>"
    );
    layout("Error", &body)
}

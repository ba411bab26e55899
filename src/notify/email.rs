// src/notify/email.rs
use std::time::Duration;

use anyhow::{Context, Result};
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::{authentication::Credentials, AsyncSmtpTransport};
use lettre::{AsyncTransport, Tokio1Executor};

use super::EmailDigest;

const SEND_TIMEOUT: Duration = Duration::from_secs(20);

struct SmtpChannel {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Vec<Mailbox>,
}

/// SMTP digest sender. Disabled (send is a logged no-op) unless every
/// `SMTP_*` variable is present and parseable at construction time.
pub struct EmailNotifier {
    channel: Option<SmtpChannel>,
}

impl EmailNotifier {
    /// Reads `SMTP_HOST`, `SMTP_PORT`, `SMTP_USER`, `SMTP_PASSWORD`,
    /// `SMTP_FROM` and `SMTP_TO` (comma-separated recipients).
    pub fn from_env() -> Self {
        Self {
            channel: channel_from_env(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.channel.is_some()
    }

    pub async fn send(&self, digest: &EmailDigest) -> Result<()> {
        let Some(ch) = &self.channel else {
            tracing::info!("SMTP credentials not fully configured; skipping email send");
            return Ok(());
        };

        let mut builder = Message::builder().from(ch.from.clone());
        for rcpt in &ch.to {
            builder = builder.to(rcpt.clone());
        }
        let msg = builder
            .subject(digest.subject.clone())
            .header(header::ContentType::TEXT_PLAIN)
            .body(digest.body.clone())
            .context("build digest email")?;

        ch.mailer.send(msg).await.context("send digest email")?;
        tracing::info!(recipients = ch.to.len(), "digest email sent");
        Ok(())
    }
}

fn channel_from_env() -> Option<SmtpChannel> {
    let host = env_var("SMTP_HOST")?;
    let port = env_var("SMTP_PORT")?;
    let user = env_var("SMTP_USER")?;
    let pass = env_var("SMTP_PASSWORD")?;
    let from_addr = env_var("SMTP_FROM")?;
    let to_addrs = env_var("SMTP_TO")?;

    let port: u16 = match port.parse() {
        Ok(p) => p,
        Err(_) => {
            tracing::warn!(value = %port, "SMTP_PORT is not a valid port; email disabled");
            return None;
        }
    };
    let from: Mailbox = match from_addr.parse() {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!(error = ?e, "SMTP_FROM is not a valid mailbox; email disabled");
            return None;
        }
    };
    let mut to = Vec::new();
    for addr in to_addrs.split(',').map(str::trim).filter(|a| !a.is_empty()) {
        match addr.parse::<Mailbox>() {
            Ok(m) => to.push(m),
            Err(e) => {
                tracing::warn!(error = ?e, addr, "SMTP_TO entry invalid; email disabled");
                return None;
            }
        }
    }
    if to.is_empty() {
        tracing::warn!("SMTP_TO contains no recipients; email disabled");
        return None;
    }

    let relay = match AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = ?e, host = %host, "invalid SMTP_HOST; email disabled");
            return None;
        }
    };
    let mailer = relay
        .port(port)
        .credentials(Credentials::new(user, pass))
        .timeout(Some(SEND_TIMEOUT))
        .build();

    Some(SmtpChannel { mailer, from, to })
}

fn env_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => {
            tracing::debug!(name, "SMTP variable missing");
            None
        }
    }
}

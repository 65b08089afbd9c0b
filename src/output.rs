/*!
 * Alert message formatting.
 *
 * The message template is a stable contract: consumers parse the trailing
 * integer out of the literal string, so the wording must never change.
 */

/// Renders alerted scene indices into fixed-template message strings, in
/// ascending index order. Non-alerted scenes produce no message.
pub fn format_alerts(alerts: &[bool]) -> Vec<String> {
    alerts
        .iter()
        .enumerate()
        .filter(|&(_, &alerted)| alerted)
        .map(|(i, _)| format!("Structural strain detected in scene {}.", i))
        .collect()
}

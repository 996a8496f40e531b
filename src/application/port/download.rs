// SPDX-License-Identifier: MPL-2.0
//! Download ports.
//!
//! The download flow decides *whether* and *when* a file transfer starts;
//! these two traits are how it reaches the outside world. The desktop shell
//! implements them asynchronously (a message dialog and a streaming HTTP
//! transfer); tests implement them with plain recorders.

/// Starts a file transfer for a resolved download target.
pub trait Downloader {
    /// Triggers the transfer. Fire-and-forget: completion and failures are
    /// reported by the adapter, not to the flow.
    fn trigger(&mut self, url: &str);
}

/// Asks the visitor to confirm a simulated payment.
pub trait PaymentPrompt {
    /// Returns `true` if the visitor accepted paying for `title`.
    fn confirm(&mut self, title: &str) -> bool;
}

impl<F> PaymentPrompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, title: &str) -> bool {
        self(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_act_as_prompts() {
        let mut seen = Vec::new();
        let mut prompt = |title: &str| {
            seen.push(title.to_string());
            true
        };
        assert!(prompt.confirm("Waves"));
        assert_eq!(seen, ["Waves"]);
    }
}

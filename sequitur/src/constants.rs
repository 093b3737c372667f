pub(crate) const ASCII_ART: &str = r#"
       ─────────────────────────────
       █████████████████████████████
       ▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇
         P → Q,  P   ⊢   Q
       ████████ sequitur ██████████
       ▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇
       ─────────────────────────────
"#;

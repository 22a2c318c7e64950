//! End-to-end analysis of a realistic component.

use vernis_gamut::{generate_report, Analyzer, Tier};

const FIXTURE: &str = r#"<template>
  <div class="container">
    <h1 id="title">{{ title }}</h1>
    <section>
      <article v-for="item in items" :key="item.id">
        <p>{{ item.description }}</p>
      </article>
    </section>
    <button @click="handleClick" :disabled="loading">Go</button>
  </div>
</template>

<script setup lang="ts">
import { ref } from 'vue'

const loading = ref(false)
const items = ref([])

const handleClick = async () => {
  const data = await fetch('/api/data').then((r) => r.json())
  items.value = [...data]
}
</script>

<style scoped lang="scss">
.container {
  display: grid;
  gap: 1rem;
  padding: var(--spacing-lg);

  @media (max-width: 768px) {
    grid-template-columns: 1fr;
  }
}

section {
  display: flex;
}

#title {
  transform: translateY(-10px);
  transition: all 0.3s ease;
}
</style>
"#;

#[test]
fn analyzes_a_realistic_component() {
    let result = Analyzer::new().analyze_content(FIXTURE, "Dashboard.vue");
    assert!(!result.is_failure());

    let blocks = result.blocks().unwrap();

    let template = blocks.template.as_ref().unwrap();
    assert_eq!(template.lang, "html");
    assert_eq!(
        template.elements,
        ["article", "button", "div", "h1", "p", "section"]
    );
    // `in` comes from the spaced v-for expression value; the bindings
    // themselves (v-for, :key, @click, :disabled) are all excluded.
    assert_eq!(template.attributes, ["class", "id", "in"]);

    assert!(blocks.script.is_none());
    let setup = blocks.script_setup.as_ref().unwrap();
    assert_eq!(setup.lang, "ts");
    assert!(setup.setup);
    assert_eq!(
        setup.js_features,
        [
            "arrow-functions",
            "async-await",
            "block-scoping",
            "es6-modules",
            "spread-syntax"
        ]
    );

    assert_eq!(blocks.styles.len(), 1);
    let style = &blocks.styles[0];
    assert_eq!(style.lang, "scss");
    assert!(style.scoped);
    assert!(!style.module);
    assert_eq!(
        style.css_features,
        [
            "custom-properties",
            "flexbox",
            "grid",
            "media-queries",
            "transforms",
            "transitions"
        ]
    );

    let analysis = result.analysis().unwrap();
    assert_eq!(analysis.total_features, 20);
    assert_eq!(analysis.widely_available.len(), 10);
    assert_eq!(analysis.newly_available.len(), 4);
    assert_eq!(analysis.not_baseline.len(), 6);
    assert_eq!(analysis.baseline_status, Tier::NotBaseline);

    assert_eq!(
        analysis.not_baseline,
        [
            "css-transitions",
            "html-article",
            "html-attr-in",
            "html-button",
            "html-section",
            "js-es6-modules"
        ]
    );
}

#[test]
fn report_lists_every_not_baseline_tag() {
    let result = Analyzer::new().analyze_content(FIXTURE, "Dashboard.vue");
    let report = generate_report(&result);

    assert!(report.starts_with("=== SFC Baseline report: Dashboard.vue ==="));
    assert!(report.contains("overall: not-baseline"));
    assert!(report.contains("features detected: 20"));
    for tag in result.analysis().unwrap().not_baseline.iter() {
        assert!(report.contains(&format!("  - {tag}")), "{tag} missing");
    }
}

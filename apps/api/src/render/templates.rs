// Handlebars templates for the single-page UI.
// `{{ }}` output is HTML-escaped by the engine; nothing here uses `{{{ }}}`.

pub const PAGE_TEMPLATE_NAME: &str = "page";

pub const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>EquiAid Navigator</title>
</head>
<body>
<main>
  <h1>EquiAid Navigator</h1>
  <p>Use this tool to discover <strong>scholarships, grants, housing, and food support programs</strong>
  you might be able to apply for. Your answers are used <em>only for this request</em> to ask AI
  for relevant programs and links. Nothing is stored and no account is created.</p>
  <p class="disclaimer"><strong>Important:</strong> This is an AI-assisted navigator, not legal or financial advice.
  Always double-check details, eligibility, and deadlines on the official websites before applying.</p>

  {{#unless configured}}
  <p class="notice" role="alert">OPENAI_API_KEY is not set in this server's environment.
  Set it before running the app to enable AI-powered recommendations.</p>
  {{/unless}}

  <h2>1. Tell us a bit about your situation</h2>
  <form method="post" action="/recommendations">
    <fieldset>
      <legend>Which of these describe your situation? (choose all that apply, optional)</legend>
      {{#each form.background_options}}
      <label><input type="checkbox" name="background_categories" value="{{label}}"{{#if selected}} checked{{/if}}> {{label}}</label>
      {{/each}}
    </fieldset>

    <label>Approximate household income range (USD)
      <select name="income_range">
        {{#each form.income_options}}
        <option value="{{label}}"{{#if selected}} selected{{/if}}>{{label}}</option>
        {{/each}}
      </select>
    </label>

    <label>Number of people in your household
      <input type="number" name="household_size" min="{{form.min_household}}" max="{{form.max_household}}" value="{{form.household_size}}">
    </label>

    <label>State (e.g., TX, OH)
      <input type="text" name="state" value="{{form.state}}" placeholder="Two-letter abbreviation if possible">
    </label>

    <label>ZIP code (optional)
      <input type="text" name="zip_code" value="{{form.zip_code}}">
    </label>

    <label>Main education or career goal
      <select name="education_goal">
        {{#each form.education_options}}
        <option value="{{label}}"{{#if selected}} selected{{/if}}>{{label}}</option>
        {{/each}}
      </select>
    </label>

    <button type="submit">Find awards and benefits</button>
  </form>

  {{#if outcome}}
  <hr>
  {{#if outcome.error}}
  <p class="error" role="alert">{{outcome.error}}</p>
  {{else}}
  <h2>2. Recommended programs for you</h2>
  {{#if outcome.empty_message}}
  <p class="warning">{{outcome.empty_message}}</p>
  {{else}}
  {{#each outcome.cards}}
  <article class="card card--{{category_class}}">
    <h3>{{index}}. {{name}}</h3>
    <p class="caption">Category: {{category}}</p>
    <p>{{description}}</p>
    {{#if link}}<p><a href="{{link}}" target="_blank" rel="noopener noreferrer">Open official page</a></p>{{else}}{{#if link_text}}<p class="caption">Link: {{link_text}}</p>{{/if}}{{/if}}
    <p><em>Why this was recommended:</em> {{why_it_matches}}</p>
  </article>
  {{/each}}
  <p class="caption">This list is generated by AI based on publicly known programs.
  It may not include all opportunities and might not always be fully up to date.
  Always confirm eligibility and details on the official sites.</p>
  <p class="caption">Generated at {{outcome.generated_at}}</p>
  {{/if}}
  {{/if}}
  {{/if}}
</main>
</body>
</html>
"#;

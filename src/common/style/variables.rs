pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --ink-deep: #020617;         /* Page background, top and bottom of the gradient */
  --ink-mid: #0F172A;          /* Middle of the background gradient */
  --ink-raised: rgba(2, 6, 23, 0.6);   /* Translucent header/footer backing */
  --accent: #FFFFFF;           /* Solid call-to-action surfaces */
  --accent-hover: #E2E8F0;     /* Solid button hover */

  /* Text Colors */
  --text-primary: #F1F5F9;
  --text-secondary: #E2E8F0;
  --text-tertiary: #CBD5E1;
  --text-muted: #94A3B8;
  --text-faint: #64748B;
  --text-inverse: #0F172A;

  /* Surfaces and Edges */
  --surface-veil: rgba(255, 255, 255, 0.05);
  --surface-raised: rgba(255, 255, 255, 0.1);
  --edge: rgba(255, 255, 255, 0.1);
  --edge-strong: rgba(255, 255, 255, 0.2);

  /* Layout */
  --header-height: 64px;
  --container-width: 1152px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-xl: 12px;
  --radius-2xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.3);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.4), 0 4px 6px -2px rgba(0, 0, 0, 0.3);
  --shadow-2xl: 0 25px 50px -12px rgba(0, 0, 0, 0.6);

  /* Animation */
  --transition-fast: 150ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
  --entrance-duration: 600ms;
  --entrance-delay: 100ms;
}"#;

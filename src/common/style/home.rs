pub const HOME_STYLES: &str = r#"
/* Promo Page Styles */

/* General Layout */
.home-container {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
  }

  section {
    padding: var(--space-16) 0;
    /* Keep anchor jumps clear of the sticky header */
    scroll-margin-top: var(--header-height);
  }

  .section-heading {
    font-size: 1.875rem;
    font-weight: 600;
    color: var(--text-primary);
  }

  .section-copy {
    margin-top: var(--space-4);
    color: var(--text-secondary);
  }

  /* Hero Section */
  .hero {
    position: relative;
    overflow: hidden;
    padding: var(--space-16) 0;
  }

  .hero-layout {
    display: grid;
    grid-template-columns: 1fr;
    align-items: center;
    gap: var(--space-10);
  }

  .hero-title {
    font-size: 2.25rem;
    font-weight: 700;
    line-height: 1.1;
    letter-spacing: -0.02em;
    animation: rise-in var(--entrance-duration) var(--easing-standard) both;
  }

  .hero-tagline {
    margin-top: var(--space-4);
    font-size: 1.125rem;
    color: var(--text-secondary);
  }

  .hero-badges {
    margin-top: var(--space-6);
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: var(--space-3);
  }

  .hero-actions {
    margin-top: var(--space-8);
    display: flex;
    flex-wrap: wrap;
    gap: var(--space-3);
  }

  .hero-cover {
    display: block;
    margin: 0 auto;
    width: 288px;
    aspect-ratio: 3 / 4;
    object-fit: cover;
    border-radius: var(--radius-2xl);
    border: 1px solid var(--edge);
    box-shadow: var(--shadow-2xl);
    animation: settle-in var(--entrance-duration) var(--easing-standard) var(--entrance-delay) both;
  }

  /* About Section */
  .about-layout {
    display: grid;
    align-items: start;
    gap: var(--space-10);
  }

  /* Excerpt Section */
  .excerpt-card {
    margin-top: var(--space-6);
    background-color: var(--surface-veil);
    line-height: 1.7;
    color: var(--text-primary);
  }

  /* The sample prose fills the card, no header band above it */
  .excerpt-card .card-content {
    padding: var(--space-6);
  }

  .excerpt-body {
    margin-top: var(--space-4);
  }

  /* Full Book Section */
  .reader-frame {
    margin-top: var(--space-6);
    width: 100%;
    overflow: hidden;
    border-radius: var(--radius-2xl);
    border: 1px solid var(--edge);
  }

  .reader-frame iframe {
    display: block;
    width: 100%;
    height: 80vh;
    border: none;
  }

  .reader-actions {
    margin-top: var(--space-4);
    display: flex;
    flex-wrap: wrap;
    gap: var(--space-3);
  }

  .reader-hint {
    margin-top: var(--space-3);
    font-size: 0.75rem;
    color: var(--text-faint);
  }

  .reader-hint code {
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    color: var(--text-muted);
  }

  /* Author Section */
  .author-section {
    border-top: 1px solid var(--edge);
    border-bottom: 1px solid var(--edge);
    background-color: rgba(2, 6, 23, 0.3);
  }

  .author-layout {
    display: grid;
    gap: var(--space-10);
  }

  .author-portrait {
    display: block;
    margin: 0 auto;
    width: 240px;
    aspect-ratio: 1 / 1;
    object-fit: cover;
    border-radius: var(--radius-2xl);
    border: 1px solid var(--edge);
    box-shadow: var(--shadow-2xl);
  }

  .author-badges {
    margin-top: var(--space-6);
    display: flex;
    flex-wrap: wrap;
    gap: var(--space-3);
  }

  /* Footer */
  .site-footer {
    border-top: 1px solid var(--edge);
    background-color: var(--ink-raised);
    margin-top: auto;
  }

  .footer-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: var(--space-3);
    padding: var(--space-8) var(--space-4);
  }

  .footer-note {
    font-size: 0.875rem;
    color: var(--text-muted);
  }

  .footer-links {
    display: flex;
    gap: var(--space-4);
    font-size: 0.875rem;
  }

  .footer-links a {
    color: var(--text-tertiary);
  }

  .footer-links a:hover {
    color: var(--text-primary);
    text-decoration: none;
  }

  /* Entrance Animations */
  @keyframes rise-in {
    from {
      opacity: 0;
      transform: translateY(20px);
    }
    to {
      opacity: 1;
      transform: translateY(0);
    }
  }

  @keyframes settle-in {
    from {
      opacity: 0;
      transform: scale(0.98);
    }
    to {
      opacity: 1;
      transform: scale(1);
    }
  }

  /* Responsive Adjustments */
  @media (min-width: 768px) {
    .hero {
      padding: var(--space-16) 0 var(--space-16);
    }

    .hero-layout {
      grid-template-columns: repeat(2, 1fr);
    }

    .hero-title {
      font-size: 3.75rem;
    }

    .hero-tagline {
      font-size: 1.25rem;
    }

    .hero-cover {
      width: 320px;
    }

    .section-heading {
      font-size: 2.25rem;
    }

    .about-layout {
      grid-template-columns: repeat(2, 1fr);
    }

    .author-layout {
      grid-template-columns: repeat(3, 1fr);
    }

    .author-bio {
      grid-column: span 2;
    }

    .footer-inner {
      flex-direction: row;
    }
  }
"#;

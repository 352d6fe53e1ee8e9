pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
  box-shadow: var(--shadow-sm);
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:active {
  transform: translateY(1px);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-solid {
  background-color: var(--accent);
  color: var(--text-inverse);
}

.btn-solid:hover {
  background-color: var(--accent-hover);
}

.btn-outline {
  background-color: transparent;
  border: 1px solid var(--edge-strong);
  color: var(--text-primary);
}

.btn-outline:hover {
  background-color: var(--surface-raised);
}

/* Wide, soft-cornered variant used by the call-to-action rows */
.btn-cta {
  border-radius: var(--radius-2xl);
  padding-left: var(--space-6);
  padding-right: var(--space-6);
}

/* Cards */
.card {
  border-radius: var(--radius-2xl);
  border: 1px solid var(--edge);
  box-shadow: var(--shadow-lg);
  overflow: hidden;
}

.card-header {
  padding: var(--space-5) var(--space-5) var(--space-2);
}

.card-title {
  font-size: 1.125rem;
  font-weight: 600;
}

.card-content {
  padding: 0 var(--space-5) var(--space-5);
}

/* Form Elements */
.form-input,
.form-textarea {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--edge);
  border-radius: var(--radius-xl);
  background-color: var(--surface-raised);
  color: var(--text-primary);
  font-size: 0.875rem;
  outline: none;
  transition: box-shadow var(--transition-fast) var(--easing-standard);
}

.form-input::placeholder,
.form-textarea::placeholder {
  color: var(--text-muted);
}

.form-input:focus,
.form-textarea:focus {
  box-shadow: 0 0 0 2px var(--edge-strong);
}

.form-textarea {
  min-height: 100px;
  resize: vertical;
}

/* Badges */
.badge {
  display: inline-flex;
  align-items: center;
  border-radius: var(--radius-xl);
  background-color: var(--surface-raised);
  padding: var(--space-1) var(--space-3);
  font-size: 0.75rem;
  color: var(--text-primary);
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}
"#;

//! Presentation for every element the enhancer injects.
//!
//! Colours and radii come from the host page's CSS custom properties, so the
//! injected widgets follow the site's light and dark palettes.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

pub const STYLE_ELEMENT_ID: &str = "docs-enhancer-styles";

pub const STYLESHEET: &str = r"
.code-block-wrapper {
    position: relative;
}

.copy-button {
    position: absolute;
    top: 0.5rem;
    right: 0.5rem;
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-sm);
    padding: 0.25rem 0.5rem;
    font-size: 0.75rem;
    cursor: pointer;
    transition: all 0.2s ease;
}

.copy-button:hover {
    background: var(--primary-color);
    border-color: var(--primary-color);
    color: white;
}

.copy-button.copied {
    background: var(--success-color);
    border-color: var(--success-color);
    color: white;
}

.table-of-contents {
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    padding: 1.5rem;
    margin-bottom: 2rem;
}

.table-of-contents h3 {
    margin: 0 0 1rem;
    font-size: 1rem;
    color: var(--text-secondary);
}

.table-of-contents ul {
    list-style: none;
    margin: 0;
    padding: 0;
}

.table-of-contents li {
    margin-bottom: 0.5rem;
}

.table-of-contents .toc-h2 {
    font-weight: 600;
}

.table-of-contents .toc-h3 {
    padding-left: 1rem;
    font-size: 0.875rem;
}

.table-of-contents .toc-h4 {
    padding-left: 2rem;
    font-size: 0.875rem;
}

.toc-link {
    color: var(--text-secondary);
    text-decoration: none;
    transition: color 0.2s ease;
}

.toc-link:hover {
    color: var(--primary-color);
}

.search-container {
    margin-bottom: 2rem;
}

.search-input {
    width: 100%;
    padding: 0.75rem;
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    background: var(--bg-primary);
    color: var(--text-primary);
    font-size: 0.875rem;
}

.search-input:focus {
    outline: none;
    border-color: var(--primary-color);
    box-shadow: 0 0 0 3px rgba(37, 99, 235, 0.1);
}

.search-results {
    margin-top: 0.5rem;
    max-height: 300px;
    overflow-y: auto;
    background: var(--bg-primary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
}

.search-result {
    padding: 1rem;
    border-bottom: 1px solid var(--border-color);
}

.search-result:last-child {
    border-bottom: none;
}

.search-result h4 {
    margin: 0 0 0.5rem;
    font-size: 0.875rem;
}

.search-result p {
    margin: 0;
    font-size: 0.75rem;
    color: var(--text-secondary);
}

.search-result a {
    color: var(--primary-color);
    text-decoration: none;
}

.search-result a:hover {
    text-decoration: underline;
}

.search-result mark {
    padding: 0.125rem 0.25rem;
    border-radius: var(--radius-sm);
    background: var(--accent-color);
    color: white;
}

.theme-toggle {
    padding: 0.5rem;
    font-size: 1.25rem;
    background: none;
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    cursor: pointer;
    transition: all 0.2s ease;
}

.theme-toggle:hover {
    background: var(--bg-secondary);
    border-color: var(--border-hover);
}

.main-nav.active {
    display: block;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    padding: 1rem;
    background: var(--bg-primary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    box-shadow: var(--shadow-lg);
}

.main-nav.active ul {
    flex-direction: column;
    gap: 1rem;
}

.mobile-menu-toggle.active span:nth-child(1) {
    transform: rotate(45deg) translate(5px, 5px);
}

.mobile-menu-toggle.active span:nth-child(2) {
    opacity: 0;
}

.mobile-menu-toggle.active span:nth-child(3) {
    transform: rotate(-45deg) translate(7px, -6px);
}

@media (max-width: 768px) {
    .main-nav {
        display: none;
    }
}
";

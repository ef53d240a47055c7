// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global stylesheet. Component layout stays inline; only the classes driven by
// comanda-catalog (category badges, entrance and scroll animations) live here.

pub const STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; }
body { margin: 0; background: #f9fafb; }

.category-entradas    { background: #fef3c7; color: #b45309; }
.category-principales { background: #fee2e2; color: #b91c1c; }
.category-postres     { background: #fce7f3; color: #be185d; }
.category-bebidas     { background: #dbeafe; color: #1d4ed8; }
.category-pizzas      { background: #ffedd5; color: #c2410c; }
.category-pastas      { background: #fef9c3; color: #a16207; }
.category-ensaladas   { background: #dcfce7; color: #15803d; }
.category-default     { background: #f3f4f6; color: #4b5563; }

@keyframes card-enter {
  from { opacity: 0; transform: translateY(20px); }
  to   { opacity: 1; transform: translateY(0); }
}
.menu-item-card { animation: card-enter 0.4s ease-out both; }

.animate-on-scroll {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}
.animate-on-scroll.animated { opacity: 1; transform: translateY(0); }

@keyframes float {
  0%, 100% { transform: translateY(0) rotate(0deg); }
  50%      { transform: translateY(-20px) rotate(8deg); }
}
.floating-shape {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.12);
  animation: float 6s ease-in-out infinite;
}

@keyframes toast-in {
  from { opacity: 0; transform: translateX(40px); }
  to   { opacity: 1; transform: translateX(0); }
}
.toast { animation: toast-in 0.25s ease-out; }
"#;

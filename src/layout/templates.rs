//! Built-in Liquid templates.

/// Article, program and about pages
pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <link rel='preconnect' href='https://fonts.googleapis.com'>
  <link rel='preconnect' href='https://fonts.gstatic.com' crossorigin>
  <link href='https://fonts.googleapis.com/css2?family=Gruppo&display=swap' rel='stylesheet'>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
{%- for sheet in stylesheets %}
  <link rel="stylesheet" href="{{ root }}{{ sheet }}">
{%- endfor %}
</head>
<body>
  <h1 class="site-title"><a href="{{ root }}index.html" style="color: inherit; text-decoration: none; font-family: inherit;">{{ site_title }}</a></h1>
  <hr style="border: none; border-top: 1px solid lightgrey;">
{{ body }}
  <hr style="border: none; border-top: 1px solid lightgrey;">
</body>
</html>
"#;

/// Root listing page
pub const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <link rel='preconnect' href='https://fonts.googleapis.com'>
  <link rel='preconnect' href='https://fonts.gstatic.com' crossorigin>
  <link href='https://fonts.googleapis.com/css2?family=Gruppo&display=swap' rel='stylesheet'>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ site_title }}</title>
{%- for sheet in stylesheets %}
  <link rel="stylesheet" href="{{ sheet }}">
{%- endfor %}
  <style>
    ul {
      list-style: none;
      padding: 0;
    }
    ul li a {
      display: block;
      padding: 10px 0;
    }
    ul li a:hover {
      background-color: rgba(200, 200, 200, 0.2);
      border-bottom: none;
      text-decoration: none;
      color: inherit;
    }
    .post-date {
      color: grey;
      font-size: 0.9em;
    }
    .program-thumb {
      display: inline-block;
      width: 250px;
      height: 250px;
      overflow: hidden;
    }
    .program-thumb img {
      width: 100%;
      height: 100%;
      object-fit: cover;
    }
  </style>
</head>
<body>
  <h1 class="site-title">{{ site_title }}</h1>
{%- if about %}
  <nav class="site-nav"><a href="{{ about.link }}">{{ about.title }}</a></nav>
{%- endif %}
  <hr style="border: none; border-top: 1px solid lightgrey;">
  <ul class="posts">
{%- for program in programs %}
  <li class="post"><a href="{{ program.link }}" class="program-thumb"><img src="{{ program.thumbnail }}" alt="{{ program.title }}"></a></li>
{%- endfor %}
  </ul>
  <hr style="border: none; border-top: 1px solid lightgrey;">
  <ul class="posts">
{%- for article in articles %}
  <li class="post">{% if article.date %}<span class="post-date">{{ article.date }}</span> {% endif %}<a href="{{ article.link }}">{{ article.title }}</a></li>
{%- endfor %}
  </ul>
</body>
</html>
"#;

/// Single converted file from the watch command
pub const STANDALONE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{{ title }}</title>
  <link rel="stylesheet" type="text/css" href="{{ stylesheet }}">
</head>
<body>
{{ body }}
</body>
</html>
"#;

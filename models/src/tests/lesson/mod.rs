mod lesson_info;
